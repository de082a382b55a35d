//! Terminal styles.
//!
//! Templates only name semantic styles (`done`, `index`, `meta`, ...). Each
//! widget theme maps those names to concrete `console::Style`s in an
//! [`outstanding::Theme`], so `tickpad theme dark` changes the terminal
//! palette as well as the exported page.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme as Palette;
use tickpad::model::Theme;

/// Some names are only referenced from templates.
#[allow(dead_code)]
pub mod names {
    pub const TAB_ACTIVE: &str = "tab_active";
    pub const TAB_INACTIVE: &str = "tab_inactive";
    pub const INDEX: &str = "index";
    pub const CHECK: &str = "check";
    pub const TEXT: &str = "text";
    pub const DONE: &str = "done";
    pub const META: &str = "meta";
    pub const EMPTY: &str = "empty";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

fn shared(palette: Palette) -> Palette {
    use names::*;
    palette
        .add(TEXT, Style::new())
        .add(TAB_ACTIVE, Style::new().bold().underlined())
        .add(SUCCESS, Style::new().green())
        .add(WARNING, Style::new().yellow())
}

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    use names::*;
    shared(Palette::new())
        .add(TAB_INACTIVE, Style::new().color256(245))
        .add(INDEX, Style::new().color256(94))
        .add(CHECK, Style::new().green())
        .add(DONE, Style::new().color256(246).strikethrough())
        .add(META, Style::new().color256(243).italic())
        .add(EMPTY, Style::new().color256(245).italic())
        .add(INFO, Style::new().color256(240))
});

static DARK: Lazy<Palette> = Lazy::new(|| {
    use names::*;
    shared(Palette::new())
        .add(TAB_INACTIVE, Style::new().color256(242))
        .add(INDEX, Style::new().yellow())
        .add(CHECK, Style::new().green().bright())
        .add(DONE, Style::new().color256(240).strikethrough())
        .add(META, Style::new().color256(248).italic())
        .add(EMPTY, Style::new().color256(244).italic())
        .add(INFO, Style::new().color256(250))
});

pub fn for_theme(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
