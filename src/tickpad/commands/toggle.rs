use crate::collection::Collection;
use crate::commands::{preview, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ItemId, Task};
use crate::store::KeyValueStore;
use tracing::debug;

/// Flips the completion flag of one task. Unknown ids change nothing and
/// only produce a warning.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    tasks: &mut Collection<Task>,
    id: ItemId,
) -> Result<CmdResult> {
    let Some(task) = tasks.toggle(id) else {
        debug!(%id, "toggle: no such task");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("No such task."));
        return Ok(result);
    };

    let message = if task.completed {
        format!("Completed: {}", preview(&task.text))
    } else {
        format!("Reopened: {}", preview(&task.text))
    };
    tasks.save(store)?;
    debug!(%id, "toggled");

    let mut result = CmdResult::default().with_affected(vec![id]);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn setup() -> (InMemoryStore, Collection<Task>) {
        let tasks = Collection::from_items(vec![Task::new(ItemId(2), "b"), Task::new(ItemId(1), "a")]);
        (InMemoryStore::new(), tasks)
    }

    #[test]
    fn toggles_and_persists() {
        let (mut store, mut tasks) = setup();
        let result = run(&mut store, &mut tasks, ItemId(1)).unwrap();

        assert!(result.changed());
        assert!(tasks.get(ItemId(1)).unwrap().completed);
        assert!(Collection::<Task>::load(&store).unwrap().get(ItemId(1)).unwrap().completed);
    }

    #[test]
    fn toggle_is_an_involution() {
        let (mut store, mut tasks) = setup();
        let before = tasks.clone();
        run(&mut store, &mut tasks, ItemId(2)).unwrap();
        run(&mut store, &mut tasks, ItemId(2)).unwrap();
        assert_eq!(tasks, before);
    }

    #[test]
    fn unknown_id_writes_nothing() {
        let (mut store, mut tasks) = setup();
        let result = run(&mut store, &mut tasks, ItemId(77)).unwrap();
        assert!(!result.changed());
        assert_eq!(store.writes(), 0);
        assert_eq!(result.messages, vec![CmdMessage::warning("No such task.")]);
    }
}
