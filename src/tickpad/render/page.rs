//! Standalone HTML page for the whole widget: both lists, the tab bar, the
//! search field and the theme attribute, as they currently stand.

use super::{HtmlRenderer, ListView, PAGE_TEMPLATE};
use crate::error::Result;
use crate::model::{Tab, Theme};
use minijinja::context;

pub struct PageContext<'a> {
    pub title: &'a str,
    pub theme: Theme,
    pub active: Tab,
    pub search: &'a str,
    pub tasks: &'a ListView,
    pub notes: &'a ListView,
}

impl HtmlRenderer {
    pub fn render_page(&self, page: &PageContext<'_>) -> Result<String> {
        let html = self.env().get_template(PAGE_TEMPLATE)?.render(context! {
            title => page.title,
            theme => page.theme.as_str(),
            active => page.active.as_str(),
            search => page.search,
            todo_markup => &page.tasks.markup,
            todo_empty => page.tasks.empty_visible,
            todo_count => page.tasks.len(),
            notes_markup => &page.notes.markup,
            notes_empty => page.notes.empty_visible,
            notes_count => page.notes.len(),
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::model::{ItemId, Note, Task};

    #[test]
    fn page_reflects_theme_tab_and_lists() {
        let r = HtmlRenderer::new().unwrap();
        let tasks = r
            .render(&Collection::from_items(vec![Task::new(ItemId(1), "Buy milk")]), "")
            .unwrap();
        let notes = r.render(&Collection::<Note>::new(), "").unwrap();

        let html = r
            .render_page(&PageContext {
                title: "Tickpad",
                theme: Theme::Dark,
                active: Tab::Notes,
                search: "\"><script>",
                tasks: &tasks,
                notes: &notes,
            })
            .unwrap();

        assert!(html.contains(r#"<body data-theme="dark">"#));
        assert!(html.contains(r#"id="notes-section" class="active-section""#));
        assert!(html.contains(r#"id="todo-section" class="hidden-section""#));
        assert!(html.contains(r#"<span class="todo-text">Buy milk</span>"#));
        assert!(html.contains(r#"id="note-empty" class="empty-state visible""#));
        assert!(html.contains(r#"id="todo-empty" class="empty-state""#));
        assert!(!html.contains("\"><script>"));
    }
}
