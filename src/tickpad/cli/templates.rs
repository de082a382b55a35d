//! Terminal output templates.
//!
//! Each template lives in its own `templates/*.tmp` file and is embedded here,
//! so editing output never means editing Rust string literals.
//!
//! Line breaks are explicit: block tags run together on one line and every
//! newline in the source is one in the output. The final newline of each file
//! is dropped by minijinja.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
