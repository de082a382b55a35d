use chrono::{Local, TimeZone};
use tickpad::api::TickpadApi;
use tickpad::confirm::{AlwaysConfirm, NeverConfirm};
use tickpad::model::{Tab, Theme};
use tickpad::store::fs::FileStore;
use tickpad::store::memory::InMemoryStore;
use tickpad::store::KeyValueStore;

#[test]
fn task_lifecycle() {
    let mut api = TickpadApi::open(InMemoryStore::new()).unwrap();

    api.set_task_input("Buy milk");
    api.submit_task_input().unwrap();
    assert_eq!(api.ui().task_input, "");
    let view = api.view(Tab::Todo);
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].text, "Buy milk");
    assert!(!view.entries[0].completed);
    assert!(!view.markup.contains(" checked"));

    let id = api.resolve(Tab::Todo, 1).unwrap();
    api.toggle_task(id).unwrap();
    assert!(api.view(Tab::Todo).entries[0].completed);
    assert!(api.view(Tab::Todo).markup.contains("todo-item completed"));

    api.delete_task(id, &mut NeverConfirm).unwrap();
    assert_eq!(api.tasks().len(), 1);

    api.delete_task(id, &mut AlwaysConfirm).unwrap();
    assert!(api.tasks().is_empty());
    assert!(api.view(Tab::Todo).empty_visible);

    let stored = api.store().load("todos").unwrap().unwrap();
    assert_eq!(stored, "[]");
}

#[test]
fn notes_are_newest_first_and_searchable() {
    let mut api = TickpadApi::open(InMemoryStore::new()).unwrap();
    let at = Local.with_ymd_and_hms(2025, 3, 9, 8, 5, 0).unwrap();

    api.add_note_at("A", at).unwrap();
    api.add_note_at("B", at).unwrap();
    let contents: Vec<&str> = api.notes().items().iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["B", "A"]);
    assert_eq!(api.notes().items()[0].date, "9 Mar, 08:05");

    api.switch_tab(Tab::Notes).unwrap();
    api.search("a").unwrap();
    let view = api.view(Tab::Notes);
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].text, "A");
    assert_eq!(view.entries[0].position, 2);
}

#[test]
fn search_only_filters_the_active_list() {
    let mut api = TickpadApi::open(InMemoryStore::new()).unwrap();
    api.add_task("apples").unwrap();
    api.add_task("pears").unwrap();
    api.add_note("apple pie recipe").unwrap();
    api.add_note("groceries").unwrap();

    api.search("APP").unwrap();
    assert_eq!(api.view(Tab::Todo).entries.len(), 1);
    assert_eq!(api.view(Tab::Notes).entries.len(), 2);

    api.switch_tab(Tab::Notes).unwrap();
    assert_eq!(api.view(Tab::Notes).entries.len(), 1);
    assert_eq!(api.view(Tab::Todo).entries.len(), 2);
}

#[test]
fn user_text_is_escaped_in_the_page() {
    let mut api = TickpadApi::open(InMemoryStore::new()).unwrap();
    api.add_task("<script>alert(1)</script>").unwrap();
    let page = api.render_page("Tickpad").unwrap();
    assert!(!page.contains("<script>alert(1)"));
    assert!(page.contains("&lt;script&gt;alert(1)"));
}

#[test]
fn state_survives_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
        api.add_task("Walk dog").unwrap();
        api.add_note("Idea").unwrap();
        let id = api.resolve(Tab::Todo, 1).unwrap();
        api.toggle_task(id).unwrap();
        api.switch_tab(Tab::Notes).unwrap();
        api.toggle_theme().unwrap();
    }

    let api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(api.tasks().items()[0].text, "Walk dog");
    assert!(api.tasks().items()[0].completed);
    assert_eq!(api.notes().items()[0].content, "Idea");
    assert_eq!(api.ui().active, Tab::Notes);
    assert_eq!(api.ui().theme, Theme::Dark);
    assert!(dir.path().join("storage.json").exists());
    assert!(!dir.path().join("storage.json.tmp").exists());
}

#[test]
fn ids_stay_unique_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let at = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    {
        let mut api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
        api.add_task_at("one", at).unwrap();
    }
    let mut api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    api.add_task_at("two", at).unwrap();
    api.add_note_at("three", at).unwrap();

    let mut ids: Vec<_> = api.tasks().ids().chain(api.notes().ids()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn corrupt_storage_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("storage.json"), "{ not json").unwrap();

    let mut api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    assert!(api.tasks().is_empty());
    assert!(api.view(Tab::Todo).empty_visible);

    api.add_task("fresh start").unwrap();
    let api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(api.tasks().len(), 1);
}

#[test]
fn binary_garbage_in_storage_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("storage.json"), [0xff, 0xfe, 0x00]).unwrap();

    let mut api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    assert!(api.tasks().is_empty());
    assert!(api.notes().is_empty());

    api.add_note("recovered").unwrap();
    let api = TickpadApi::open(FileStore::new(dir.path())).unwrap();
    assert_eq!(api.notes().items()[0].content, "recovered");
}

#[test]
fn largest_possible_id_never_panics_or_repeats() {
    let mut store = InMemoryStore::new();
    store
        .save("todos", r#"[{"id":18446744073709551615,"text":"x","completed":false}]"#)
        .unwrap();

    let mut api = TickpadApi::open(store).unwrap();
    assert!(api.add_task("y").is_err());
    assert_eq!(api.tasks().len(), 1);
    assert_eq!(api.tasks().items()[0].text, "x");
}
