use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Theme, THEME_KEY};
use crate::store::KeyValueStore;
use crate::ui::UiState;
use tracing::{debug, warn};

/// Restores the theme. Missing or unknown values fall back to light.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Theme> {
    let Some(raw) = store.load(THEME_KEY)? else {
        return Ok(Theme::default());
    };
    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "unknown stored theme, using default");
        Theme::default()
    }))
}

pub fn set<S: KeyValueStore>(store: &mut S, ui: &mut UiState, theme: Theme) -> Result<CmdResult> {
    ui.theme = theme;
    // Stored as the bare word, not JSON.
    store.save(THEME_KEY, theme.as_str())?;
    debug!(%theme, "theme set");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Theme: {}", theme)));
    Ok(result)
}

pub fn toggle<S: KeyValueStore>(store: &mut S, ui: &mut UiState) -> Result<CmdResult> {
    let next = ui.theme.toggled();
    set(store, ui, next)
}
