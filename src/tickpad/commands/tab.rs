use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Tab, TAB_KEY};
use crate::store::KeyValueStore;
use crate::ui::UiState;
use tracing::{debug, warn};

/// Restores the active list. Missing or unknown values fall back to tasks.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Tab> {
    let Some(raw) = store.load(TAB_KEY)? else {
        return Ok(Tab::default());
    };
    Ok(raw.parse().unwrap_or_else(|_| {
        warn!(value = %raw, "unknown stored tab, using default");
        Tab::default()
    }))
}

/// Makes `tab` the visible list and remembers it.
pub fn run<S: KeyValueStore>(store: &mut S, ui: &mut UiState, tab: Tab) -> Result<CmdResult> {
    ui.active = tab;
    store.save(TAB_KEY, tab.as_str())?;
    debug!(%tab, "switched list");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Showing {}", label(tab))));
    Ok(result)
}

fn label(tab: Tab) -> &'static str {
    match tab {
        Tab::Todo => "tasks",
        Tab::Notes => "notes",
    }
}
