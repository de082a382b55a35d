use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls so far. Lets tests assert that no-ops stay no-ops.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{IdGenerator, Note, Task, Theme, NOTES_KEY, THEME_KEY, TODOS_KEY};
    use crate::store::save_collection;
    use chrono::NaiveDate;

    /// Builds a store pre-populated the way a returning user would have it.
    /// Items are given in display order (newest first).
    pub struct StoreFixture {
        pub store: InMemoryStore,
        tasks: Vec<Task>,
        notes: Vec<Note>,
        ids: IdGenerator,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                tasks: Vec::new(),
                notes: Vec::new(),
                ids: IdGenerator::seeded([crate::model::ItemId(1_700_000_000_000)]),
            }
        }

        pub fn with_task(mut self, text: &str, completed: bool) -> Self {
            let mut task = Task::new(self.ids.next(0).unwrap(), text);
            task.completed = completed;
            self.tasks.insert(0, task);
            self.flush()
        }

        pub fn with_note(mut self, content: &str) -> Self {
            let created = NaiveDate::from_ymd_opt(2025, 1, 5)
                .and_then(|d| d.and_hms_opt(14, 30, 0))
                .unwrap();
            self.notes.insert(0, Note::new(self.ids.next(0).unwrap(), content, created));
            self.flush()
        }

        pub fn with_theme(mut self, theme: Theme) -> Self {
            self.store.save(THEME_KEY, theme.as_str()).unwrap();
            self
        }

        pub fn with_raw(mut self, key: &str, value: &str) -> Self {
            self.store.save(key, value).unwrap();
            self
        }

        fn flush(mut self) -> Self {
            save_collection(&mut self.store, TODOS_KEY, &self.tasks).unwrap();
            save_collection(&mut self.store, NOTES_KEY, &self.notes).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
