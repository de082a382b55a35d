//! # Collections
//!
//! A [`Collection`] is the in-memory, newest-first sequence behind one list.
//! It is the single owner of that list's items; the store only ever sees full
//! snapshots of it (see [`crate::store`]).
//!
//! The methods here are pure state changes. Persisting and re-rendering after a
//! change is the command layer's job, so these stay trivially testable.

use crate::error::Result;
use crate::model::{Item, ItemId, Task};
use crate::store::{load_collection, save_collection, KeyValueStore};

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Item> {
    items: Vec<T>,
}

impl<T: Item> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items must already be newest first.
    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self::from_items(load_collection(store, T::STORAGE_KEY)?))
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        save_collection(store, T::STORAGE_KEY, &self.items)
    }

    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Removes the item with `id`, if any.
    pub fn remove(&mut self, id: ItemId) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items whose body contains `filter`, ignoring case, in collection order.
    pub fn list(&self, filter: &str) -> Vec<&T> {
        let needle = filter.to_lowercase();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(Item::id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Collection<Task> {
    /// Flips `completed` on the task with `id`. Returns the updated task.
    pub fn toggle(&mut self, id: ItemId) -> Option<&Task> {
        let task = self.items.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task)
    }
}
