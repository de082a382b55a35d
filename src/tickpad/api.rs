//! # API Facade
//!
//! [`TickpadApi`] is the widget: it owns both collections, the presentation
//! state, the id generator and the two rendered [`ListView`]s, and it is the
//! single entry point every client goes through.
//!
//! ## The Cycle
//!
//! Every handler follows the same three steps:
//!
//! 1. A command from [`crate::commands`] mutates one collection and writes the
//!    full snapshot to the store.
//! 2. The affected list is rendered again from scratch.
//! 3. A [`CmdResult`] describing the change is returned.
//!
//! Nothing is global: two `TickpadApi` values over two stores are fully
//! independent, which is what the tests rely on.
//!
//! ## Filter Policy
//!
//! The rendered filter of the visible list always equals the search field.
//!
//! - `search` re-renders the visible list only.
//! - `toggle_task` and `delete_*` keep the current search.
//! - `add_*` clears the search field, so the new item is on screen.
//! - `switch_tab` re-renders both lists: the newly visible one with the
//!   search text, the hidden one in full.

use crate::collection::Collection;
use crate::commands::{self, CmdResult};
use crate::confirm::Confirm;
use crate::error::{Result, TickpadError};
use crate::model::{IdGenerator, Item, ItemId, Note, Tab, Task, Theme};
use crate::render::page::PageContext;
use crate::render::{HtmlRenderer, ListView};
use crate::store::KeyValueStore;
use crate::ui::UiState;
use chrono::{DateTime, Local};
use tracing::debug;

pub struct TickpadApi<S: KeyValueStore> {
    store: S,
    tasks: Collection<Task>,
    notes: Collection<Note>,
    ids: IdGenerator,
    ui: UiState,
    renderer: HtmlRenderer,
    tasks_view: ListView,
    notes_view: ListView,
}

impl<S: KeyValueStore> TickpadApi<S> {
    /// Restores everything from `store` and renders both lists.
    pub fn open(store: S) -> Result<Self> {
        let tasks = Collection::<Task>::load(&store)?;
        let notes = Collection::<Note>::load(&store)?;
        let ui = UiState::new(commands::tab::load(&store)?, commands::theme::load(&store)?);
        let ids = IdGenerator::seeded(tasks.ids().chain(notes.ids()));
        debug!(tasks = tasks.len(), notes = notes.len(), active = %ui.active, "opened");

        let mut api = Self {
            store,
            tasks,
            notes,
            ids,
            ui,
            renderer: HtmlRenderer::new()?,
            tasks_view: ListView::default(),
            notes_view: ListView::default(),
        };
        api.refresh_all()?;
        Ok(api)
    }

    // --- tasks ---

    pub fn add_task(&mut self, raw: &str) -> Result<CmdResult> {
        self.add_task_at(raw, Local::now())
    }

    pub fn add_task_at(&mut self, raw: &str, now: DateTime<Local>) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, &mut self.tasks, &mut self.ids, raw, now)?;
        if result.changed() {
            self.ui.search.clear();
            self.refresh_all()?;
        }
        Ok(result)
    }

    pub fn set_task_input(&mut self, text: impl Into<String>) {
        self.ui.task_input = text.into();
    }

    /// Adds whatever is in the task entry field, clearing it on success.
    pub fn submit_task_input(&mut self) -> Result<CmdResult> {
        let raw = self.ui.task_input.clone();
        let result = self.add_task(&raw)?;
        if result.changed() {
            self.ui.task_input.clear();
        }
        Ok(result)
    }

    pub fn toggle_task(&mut self, id: ItemId) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.store, &mut self.tasks, id)?;
        if result.changed() {
            self.refresh(Tab::Todo)?;
        }
        Ok(result)
    }

    pub fn delete_task<C: Confirm + ?Sized>(&mut self, id: ItemId, confirm: &mut C) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, &mut self.tasks, id, confirm)?;
        if result.changed() {
            self.refresh(Tab::Todo)?;
        }
        Ok(result)
    }

    // --- notes ---

    pub fn add_note(&mut self, raw: &str) -> Result<CmdResult> {
        self.add_note_at(raw, Local::now())
    }

    pub fn add_note_at(&mut self, raw: &str, now: DateTime<Local>) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, &mut self.notes, &mut self.ids, raw, now)?;
        if result.changed() {
            self.ui.search.clear();
            self.refresh_all()?;
        }
        Ok(result)
    }

    pub fn set_note_input(&mut self, text: impl Into<String>) {
        self.ui.note_input = text.into();
    }

    /// Adds whatever is in the note entry field, clearing it on success.
    pub fn submit_note_input(&mut self) -> Result<CmdResult> {
        let raw = self.ui.note_input.clone();
        let result = self.add_note(&raw)?;
        if result.changed() {
            self.ui.note_input.clear();
        }
        Ok(result)
    }

    pub fn delete_note<C: Confirm + ?Sized>(&mut self, id: ItemId, confirm: &mut C) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, &mut self.notes, id, confirm)?;
        if result.changed() {
            self.refresh(Tab::Notes)?;
        }
        Ok(result)
    }

    /// Deletes from whichever list `tab` names.
    pub fn delete<C: Confirm + ?Sized>(&mut self, tab: Tab, id: ItemId, confirm: &mut C) -> Result<CmdResult> {
        match tab {
            Tab::Todo => self.delete_task(id, confirm),
            Tab::Notes => self.delete_note(id, confirm),
        }
    }

    // --- search, tabs, theme ---

    /// Routes the search field to the visible list.
    pub fn search(&mut self, text: impl Into<String>) -> Result<CmdResult> {
        self.ui.search = text.into();
        self.refresh(self.ui.active)?;
        Ok(CmdResult::default())
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Result<CmdResult> {
        let result = commands::tab::run(&mut self.store, &mut self.ui, tab)?;
        self.refresh_all()?;
        Ok(result)
    }

    pub fn toggle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::toggle(&mut self.store, &mut self.ui)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<CmdResult> {
        commands::theme::set(&mut self.store, &mut self.ui, theme)
    }

    // --- reading ---

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    pub fn notes(&self) -> &Collection<Note> {
        &self.notes
    }

    pub fn view(&self, tab: Tab) -> &ListView {
        match tab {
            Tab::Todo => &self.tasks_view,
            Tab::Notes => &self.notes_view,
        }
    }

    pub fn active_view(&self) -> &ListView {
        self.view(self.ui.active)
    }

    /// Maps a 1-based display position in `tab` to the item id.
    pub fn resolve(&self, tab: Tab, position: usize) -> Result<ItemId> {
        let id = match tab {
            Tab::Todo => nth_id(&self.tasks, position),
            Tab::Notes => nth_id(&self.notes, position),
        };
        id.ok_or_else(|| {
            TickpadError::Api(format!("No {} at position {}", noun(tab), position))
        })
    }

    pub fn render_page(&self, title: &str) -> Result<String> {
        self.renderer.render_page(&PageContext {
            title,
            theme: self.ui.theme,
            active: self.ui.active,
            search: &self.ui.search,
            tasks: &self.tasks_view,
            notes: &self.notes_view,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // --- rendering ---

    fn refresh(&mut self, tab: Tab) -> Result<()> {
        let filter = self.ui.filter_for(tab).to_string();
        match tab {
            Tab::Todo => self.tasks_view = self.renderer.render(&self.tasks, &filter)?,
            Tab::Notes => self.notes_view = self.renderer.render(&self.notes, &filter)?,
        }
        Ok(())
    }

    fn refresh_all(&mut self) -> Result<()> {
        self.refresh(Tab::Todo)?;
        self.refresh(Tab::Notes)
    }
}

fn nth_id<T: Item>(items: &Collection<T>, position: usize) -> Option<ItemId> {
    let index = position.checked_sub(1)?;
    items.items().get(index).map(|item| item.id())
}

fn noun(tab: Tab) -> &'static str {
    match tab {
        Tab::Todo => "task",
        Tab::Notes => "note",
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel};
