//! # Terminal Rendering
//!
//! Turns [`ListView`]s and command messages into styled terminal text.
//!
//! Layout math (widths, truncation, padding) stays in Rust because it needs
//! Unicode-aware measuring. The templates in `templates/` only decide what goes
//! on which line and name the semantic style of each piece; the `style` filter
//! registered by [`outstanding::Renderer`] resolves those names against the
//! palette of the current widget theme.
//!
//! Item text is printed literally. There is no markup in a terminal to inject
//! into, so nothing is escaped here (unlike `tickpad::render`).

use super::styles::{self, names};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE};
use chrono::{DateTime, Utc};
use minijinja::context;
use outstanding::Renderer;
use serde::Serialize;
use tickpad::api::{CmdMessage, MessageLevel};
use tickpad::error::Result;
use tickpad::model::{ItemId, Tab, Theme};
use tickpad::render::{ListEntry, ListView};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LIST: &str = "list.tmp";
const MESSAGES: &str = "messages.tmp";
const INDEX_WIDTH: usize = 4;
const DONE_MARK: &str = "[x] ";
const OPEN_MARK: &str = "[ ] ";

#[derive(Serialize)]
struct TabData {
    label: String,
    style: &'static str,
    sep: &'static str,
}

#[derive(Serialize)]
struct RowData {
    index: String,
    check: &'static str,
    text: String,
    text_style: &'static str,
    padding: String,
    meta: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

/// What the list screen shows: the visible list plus the tab bar counts.
pub struct ListScreen<'a> {
    pub view: &'a ListView,
    pub task_count: usize,
    pub note_count: usize,
}

pub struct TermRenderer {
    renderer: Renderer,
    width: usize,
}

impl TermRenderer {
    pub fn new(theme: Theme, use_color: bool, width: usize) -> Result<Self> {
        let mut renderer = Renderer::with_color(styles::for_theme(theme).clone(), use_color);
        renderer.add_template(LIST, LIST_TEMPLATE)?;
        renderer.add_template(MESSAGES, MESSAGES_TEMPLATE)?;
        Ok(Self { renderer, width })
    }

    pub fn list(&self, screen: &ListScreen<'_>) -> Result<String> {
        self.list_at(screen, Utc::now())
    }

    fn list_at(&self, screen: &ListScreen<'_>, now: DateTime<Utc>) -> Result<String> {
        let view = screen.view;
        let tabs = vec![
            tab_data("Tasks", screen.task_count, view.tab == Tab::Todo, " "),
            tab_data("Notes", screen.note_count, view.tab == Tab::Notes, ""),
        ];
        let search_label = if view.filter.is_empty() {
            String::new()
        } else {
            format!("   search: {}", view.filter)
        };
        let rows: Vec<RowData> = view
            .entries
            .iter()
            .map(|entry| self.row(view.tab, entry, now))
            .collect();
        let empty_message = match (view.tab, view.filter.is_empty()) {
            (Tab::Todo, true) => "No tasks yet.",
            (Tab::Notes, true) => "No notes yet.",
            (_, false) => "Nothing matches the search.",
        };

        let output = self.renderer.render(
            LIST,
            &context! {
                tabs => tabs,
                search_label => search_label,
                empty => view.empty_visible,
                empty_message => empty_message,
                rows => rows,
            },
        )?;
        Ok(output)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        let data: Vec<MessageData> = messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: level_style(&m.level),
            })
            .collect();
        let output = self
            .renderer
            .render(MESSAGES, &context! { messages => data })?;
        Ok(output)
    }

    fn row(&self, tab: Tab, entry: &ListEntry, now: DateTime<Utc>) -> RowData {
        let index = format!("{:>width$}.", entry.position, width = INDEX_WIDTH - 1);
        let (check, meta) = match tab {
            Tab::Todo => (
                if entry.completed { DONE_MARK } else { OPEN_MARK },
                format_time_ago(entry.id, now),
            ),
            Tab::Notes => ("", entry.date.clone().unwrap_or_default()),
        };

        // index + space + check + text + gap + meta
        let fixed = INDEX_WIDTH + 1 + check.width() + 2 + meta.width();
        let available = self.width.saturating_sub(fixed).max(8);
        let text = truncate_to_width(&single_line(&entry.text), available);
        let padding = " ".repeat(available.saturating_sub(text.width()) + 2);

        RowData {
            index,
            check,
            text_style: if entry.completed { names::DONE } else { names::TEXT },
            text,
            padding,
            meta,
        }
    }
}

fn tab_data(name: &str, count: usize, active: bool, sep: &'static str) -> TabData {
    TabData {
        label: format!("{} ({})", name, count),
        style: if active {
            names::TAB_ACTIVE
        } else {
            names::TAB_INACTIVE
        },
        sep,
    }
}

fn level_style(level: &MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
    }
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Task ids are creation times in milliseconds.
fn format_time_ago(id: ItemId, now: DateTime<Utc>) -> String {
    let Some(created) = i64::try_from(id.0)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
    else {
        return String::new();
    };
    let elapsed = now.signed_duration_since(created).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(position: usize, id: u64, text: &str, completed: bool, date: Option<&str>) -> ListEntry {
        ListEntry {
            id: ItemId(id),
            position,
            text: text.to_string(),
            completed,
            date: date.map(str::to_string),
        }
    }

    fn view(tab: Tab, filter: &str, entries: Vec<ListEntry>) -> ListView {
        ListView {
            tab,
            filter: filter.to_string(),
            empty_visible: entries.is_empty(),
            entries,
            markup: String::new(),
        }
    }

    fn plain() -> TermRenderer {
        TermRenderer::new(Theme::Light, false, 60).unwrap()
    }

    #[test]
    fn lists_tasks_with_checkboxes_and_positions() {
        let now = Utc::now();
        let id = (now - Duration::minutes(5)).timestamp_millis() as u64;
        let tasks = view(
            Tab::Todo,
            "",
            vec![
                entry(1, id, "Buy milk", true, None),
                entry(2, id, "Walk dog", false, None),
            ],
        );
        let screen = ListScreen { view: &tasks, task_count: 2, note_count: 0 };
        let out = plain().list_at(&screen, now).unwrap();

        assert!(out.starts_with("Tasks (2) Notes (0)\n"));
        assert!(out.contains("  1. [x] Buy milk"));
        assert!(out.contains("  2. [ ] Walk dog"));
        assert!(out.contains("5 minutes ago"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn shows_empty_indicator() {
        let tasks = view(Tab::Todo, "", vec![]);
        let screen = ListScreen { view: &tasks, task_count: 0, note_count: 3 };
        let out = plain().list(&screen).unwrap();
        assert!(out.contains("Tasks (0) Notes (3)"));
        assert!(out.contains("No tasks yet."));
    }

    #[test]
    fn notes_show_captured_date_and_search() {
        let notes = view(Tab::Notes, "a", vec![entry(2, 1, "A", false, Some("5 Jan, 14:30"))]);
        let screen = ListScreen { view: &notes, task_count: 0, note_count: 2 };
        let out = plain().list(&screen).unwrap();
        assert!(out.contains("search: a"));
        assert!(out.contains("  2. A"));
        assert!(out.contains("5 Jan, 14:30"));
        assert!(!out.contains("[ ]"));
    }

    #[test]
    fn script_text_prints_literally() {
        let tasks = view(Tab::Todo, "", vec![entry(1, 1, "<script>alert(1)</script>", false, None)]);
        let screen = ListScreen { view: &tasks, task_count: 1, note_count: 0 };
        let out = plain().list(&screen).unwrap();
        assert!(out.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let out = plain()
            .messages(&[CmdMessage::success("Added task: a"), CmdMessage::info("Theme: dark")])
            .unwrap();
        assert_eq!(out, "Added task: a\nTheme: dark\n");
    }

    #[test]
    fn truncates_long_text_to_width() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn multiline_text_is_flattened() {
        assert_eq!(single_line("a\nb\r\nc"), "a b  c");
    }
}
