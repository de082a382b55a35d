//! # Tickpad Architecture
//!
//! Tickpad is a small to-do and notes widget: two lists (tasks, notes), a
//! search field, a tab bar and a light/dark theme, all kept in a key-value text
//! store. It is a **UI-agnostic library** first; the `tickpad` binary is one
//! client of it, and the HTML page export is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns all widget state                                    │
//! │  - mutate → persist → re-render on every handler            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)  +  Rendering (render/)      │
//! │  - One state change per command, full snapshot writes       │
//! │  - Views rebuilt from scratch, HTML auto-escaped            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout, reads stdin or exits. The one
//! blocking interaction, "are you sure?" before a delete, is injected through
//! [`confirm::Confirm`].
//!
//! ## Module Overview
//!
//! - [`api`]: The widget facade
//! - [`commands`]: add / toggle / delete / tab / theme / config
//! - [`collection`]: Newest-first item sequences
//! - [`render`]: List views and the HTML page
//! - [`store`]: Key-value persistence and collection snapshots
//! - [`model`]: `Task`, `Note`, ids, tab and theme
//! - [`ui`]: Presentation state (active list, theme, text fields)
//! - [`config`]: Configuration file
//! - [`confirm`]: Confirmation callbacks
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod model;
pub mod render;
pub mod store;
pub mod ui;
