//! Presentation state: which list is visible, the theme, and the contents of
//! the three text fields. None of it is item data.

use crate::model::{Tab, Theme};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active: Tab,
    pub theme: Theme,
    /// Current text of the search field.
    pub search: String,
    pub task_input: String,
    pub note_input: String,
}

impl UiState {
    pub fn new(active: Tab, theme: Theme) -> Self {
        Self {
            active,
            theme,
            ..Self::default()
        }
    }

    /// The filter a list is rendered with. The search field only filters the
    /// visible list; the hidden one is always rendered in full.
    pub fn filter_for(&self, tab: Tab) -> &str {
        if tab == self.active {
            &self.search
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_applies_to_active_list_only() {
        let mut ui = UiState::new(Tab::Notes, Theme::Light);
        ui.search = "milk".into();
        assert_eq!(ui.filter_for(Tab::Notes), "milk");
        assert_eq!(ui.filter_for(Tab::Todo), "");
    }
}
