//! # Command Layer
//!
//! One module per operation. Each `run` function takes the store and the
//! state it touches as plain arguments, applies the change, writes the new
//! snapshot, and reports what happened in a [`CmdResult`]. Re-rendering is left
//! to the caller ([`crate::api::TickpadApi`]), which knows which lists are
//! visible and with which filter.
//!
//! Commands never print and never prompt on their own; confirmation comes in
//! through [`crate::confirm::Confirm`].

use crate::config::TickpadConfig;
use crate::model::ItemId;

pub mod add;
pub mod config;
pub mod delete;
pub mod tab;
pub mod theme;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items created, changed or removed.
    pub affected: Vec<ItemId>,
    pub config: Option<TickpadConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, ids: Vec<ItemId>) -> Self {
        self.affected = ids;
        self
    }

    pub fn with_config(mut self, config: TickpadConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when the command changed item data.
    pub fn changed(&self) -> bool {
        !self.affected.is_empty()
    }
}

/// Shortens item text for one-line messages.
pub(crate) fn preview(text: &str) -> String {
    const MAX: usize = 40;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX - 1).collect();
        format!("{}…", cut)
    }
}
