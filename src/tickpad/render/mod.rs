//! # Item Rendering
//!
//! Rendering turns a collection plus a filter string into a [`ListView`]: the
//! complete visible state of one list container. A view is never patched; every
//! render builds a fresh one from the current collection, which makes rendering
//! idempotent.
//!
//! A view carries two faces of the same content:
//!
//! - `entries`: structured rows, for clients that draw their own widgets (the
//!   terminal client in `cli/`).
//! - `markup`: the list container's children as HTML, produced by the embedded
//!   minijinja templates in `render/templates/`.
//!
//! ## Escaping
//!
//! Every template name ends in `.html`, which switches minijinja's
//! auto-escaping on. Item text is therefore always inserted as text, never as
//! markup: `<script>` in a task comes out as `&lt;script&gt;`. Templates must
//! not mark user text `| safe`; the only `safe` values are list markups that
//! were themselves rendered (and escaped) here.

use crate::collection::Collection;
use crate::error::Result;
use crate::model::{Item, ItemId, Note, Tab, Task};
use minijinja::{context, Environment};
use serde::Serialize;

pub mod page;

pub const TODO_LIST_TEMPLATE: &str = "todo_list.html";
pub const NOTES_LIST_TEMPLATE: &str = "notes_list.html";
pub const PAGE_TEMPLATE: &str = "page.html";

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: ItemId,
    /// 1-based position in the unfiltered collection. Stable under filtering,
    /// so it can be used to address the item.
    pub position: usize,
    pub text: String,
    pub completed: bool,
    pub date: Option<String>,
}

/// Full visible state of one list container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListView {
    pub tab: Tab,
    pub filter: String,
    pub entries: Vec<ListEntry>,
    pub markup: String,
    /// Whether the "nothing here" indicator is shown.
    pub empty_visible: bool,
}

impl ListView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Items that know which list they belong to and how they appear in it.
pub trait Renderable: Item {
    const TAB: Tab;
    const LIST_TEMPLATE: &'static str;

    fn entry(&self, position: usize) -> ListEntry;
}

impl Renderable for Task {
    const TAB: Tab = Tab::Todo;
    const LIST_TEMPLATE: &'static str = TODO_LIST_TEMPLATE;

    fn entry(&self, position: usize) -> ListEntry {
        ListEntry {
            id: self.id,
            position,
            text: self.text.clone(),
            completed: self.completed,
            date: None,
        }
    }
}

impl Renderable for Note {
    const TAB: Tab = Tab::Notes;
    const LIST_TEMPLATE: &'static str = NOTES_LIST_TEMPLATE;

    fn entry(&self, position: usize) -> ListEntry {
        ListEntry {
            id: self.id,
            position,
            text: self.content.clone(),
            completed: false,
            date: Some(self.date.clone()),
        }
    }
}

/// Holds the compiled HTML templates.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(TODO_LIST_TEMPLATE, include_str!("templates/todo_list.html"))?;
        env.add_template(NOTES_LIST_TEMPLATE, include_str!("templates/notes_list.html"))?;
        env.add_template(PAGE_TEMPLATE, include_str!("templates/page.html"))?;
        Ok(Self { env })
    }

    /// Renders the items of `collection` matching `filter`.
    pub fn render<T: Renderable>(&self, collection: &Collection<T>, filter: &str) -> Result<ListView> {
        let needle = filter.to_lowercase();
        let entries: Vec<ListEntry> = collection
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.matches(&needle))
            .map(|(i, item)| item.entry(i + 1))
            .collect();

        let markup = self
            .env
            .get_template(T::LIST_TEMPLATE)?
            .render(context! { entries => &entries })?;

        Ok(ListView {
            tab: T::TAB,
            filter: filter.to_string(),
            empty_visible: entries.is_empty(),
            entries,
            markup,
        })
    }

    pub(crate) fn env(&self) -> &Environment<'static> {
        &self.env
    }
}
