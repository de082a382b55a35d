//! # CLI Behavior
//!
//! The terminal client for tickpad. The widget itself lives in the library;
//! this module maps arguments to [`tickpad::api::TickpadApi`] calls and prints
//! the outcome.
//!
//! ## Naked Execution
//!
//! Running `tickpad` with no arguments is `tickpad list`.
//!
//! ## Deleting
//!
//! `tickpad rm N` asks `[y/N]` on the terminal first. `--yes`, or
//! `tickpad config confirm-delete off`, skips the question.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print
//! - `prompt`: Terminal confirmation
//! - `render`: Styled list and message output
//! - `setup`: Argument parsing via clap
//! - `styles`: Per-theme terminal palettes
//! - `templates`: Output templates

mod commands;
mod prompt;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
