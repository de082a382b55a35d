use crate::error::TickpadError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage keys. These match the layout of the original browser storage so a
/// snapshot exported from there can be dropped into `storage.json` unchanged.
pub const TODOS_KEY: &str = "todos";
pub const NOTES_KEY: &str = "notes";
pub const THEME_KEY: &str = "theme";
pub const TAB_KEY: &str = "tab";

/// Opaque item identifier, serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out creation-time ids that never repeat.
///
/// Ids are the creation time in milliseconds, bumped past the last id handed
/// out (or loaded) when two items land in the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator so new ids sort after every id already in use.
    pub fn seeded<I: IntoIterator<Item = ItemId>>(ids: I) -> Self {
        let last = ids.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Returns `None` once every id above the last one is used up.
    pub fn next(&mut self, now_millis: i64) -> Option<ItemId> {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let bumped = self.last.checked_add(1)?;
        self.last = now.max(bumped);
        Some(ItemId(self.last))
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

/// Behavior shared by everything a [`crate::collection::Collection`] can hold.
pub trait Item: Clone + fmt::Debug + Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;
    /// Singular noun used in messages and prompts ("task", "note").
    const NOUN: &'static str;

    fn create(id: ItemId, body: String, created: NaiveDateTime) -> Self;

    fn id(&self) -> ItemId;

    /// The user-supplied text searched by filters.
    fn body(&self) -> &str;

    /// `needle` must already be lowercased.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.body().to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

impl Item for Task {
    const STORAGE_KEY: &'static str = TODOS_KEY;
    const NOUN: &'static str = "task";

    fn create(id: ItemId, body: String, _created: NaiveDateTime) -> Self {
        Task::new(id, body)
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn body(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: ItemId,
    pub content: String,
    /// Display date captured when the note was written. Never recomputed.
    pub date: String,
}

impl Note {
    pub fn new(id: ItemId, content: impl Into<String>, created: NaiveDateTime) -> Self {
        Self {
            id,
            content: content.into(),
            date: format_display_date(&created),
        }
    }
}

impl Item for Note {
    const STORAGE_KEY: &'static str = NOTES_KEY;
    const NOUN: &'static str = "note";

    fn create(id: ItemId, body: String, created: NaiveDateTime) -> Self {
        Note::new(id, body, created)
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn body(&self) -> &str {
        &self.content
    }
}

const ID_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Formats a timestamp the way note cards show it: `5 Jan, 14:30`
/// (Indonesian short month names, 24h clock).
pub fn format_display_date(at: &NaiveDateTime) -> String {
    format!(
        "{} {}, {:02}:{:02}",
        at.day(),
        ID_MONTHS[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

/// Which list is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Todo,
    Notes,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Todo => "todo",
            Tab::Notes => "notes",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = TickpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "todos" | "task" | "tasks" => Ok(Tab::Todo),
            "notes" | "note" => Ok(Tab::Notes),
            other => Err(TickpadError::Api(format!("Unknown list: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TickpadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TickpadError::Api(format!("Unknown theme: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn display_date_uses_indonesian_months() {
        assert_eq!(format_display_date(&at(1, 5, 14, 30)), "5 Jan, 14:30");
        assert_eq!(format_display_date(&at(5, 17, 9, 5)), "17 Mei, 09:05");
        assert_eq!(format_display_date(&at(8, 1, 0, 0)), "1 Agu, 00:00");
        assert_eq!(format_display_date(&at(12, 31, 23, 59)), "31 Des, 23:59");
    }

    #[test]
    fn ids_follow_the_clock() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1_000), Some(ItemId(1_000)));
        assert_eq!(ids.next(2_000), Some(ItemId(2_000)));
    }

    #[test]
    fn ids_never_collide_within_one_millisecond() {
        let mut ids = IdGenerator::new();
        let a = ids.next(1_000).unwrap();
        let b = ids.next(1_000).unwrap();
        let c = ids.next(999).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn seeded_generator_skips_existing_ids() {
        let mut ids = IdGenerator::seeded([ItemId(5_000), ItemId(7_000)]);
        assert_eq!(ids.next(6_000), Some(ItemId(7_001)));
    }

    #[test]
    fn largest_loaded_id_exhausts_the_generator() {
        let mut ids = IdGenerator::seeded([ItemId(u64::MAX)]);
        assert_eq!(ids.next(1_000), None);
        assert_eq!(ids.next(i64::MAX), None);
        assert_eq!(ids.last(), u64::MAX);

        let mut ids = IdGenerator::seeded([ItemId(u64::MAX - 1)]);
        assert_eq!(ids.next(1_000), Some(ItemId(u64::MAX)));
        assert_eq!(ids.next(1_000), None);
    }

    #[test]
    fn task_serializes_with_original_field_names() {
        let task = Task::new(ItemId(42), "Buy milk");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 42, "text": "Buy milk", "completed": false})
        );
    }

    #[test]
    fn note_captures_date_at_creation() {
        let note = Note::new(ItemId(1), "Hello", at(3, 2, 8, 15));
        assert_eq!(note.date, "2 Mar, 08:15");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "content": "Hello", "date": "2 Mar, 08:15"})
        );
    }

    #[test]
    fn matches_is_case_insensitive() {
        let task = Task::new(ItemId(1), "Buy MILK");
        assert!(task.matches("milk"));
        assert!(task.matches(""));
        assert!(!task.matches("bread"));
    }

    #[test]
    fn tab_and_theme_parse_from_stored_strings() {
        assert_eq!("todo".parse::<Tab>().unwrap(), Tab::Todo);
        assert_eq!("notes".parse::<Tab>().unwrap(), Tab::Notes);
        assert!("archive".parse::<Tab>().is_err());
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
