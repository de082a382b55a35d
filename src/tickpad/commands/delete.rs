use crate::collection::Collection;
use crate::commands::{preview, CmdMessage, CmdResult};
use crate::confirm::Confirm;
use crate::error::Result;
use crate::model::{Item, ItemId};
use crate::store::KeyValueStore;
use tracing::debug;

/// Prompt shown before removing an item of kind `T`.
pub fn prompt_for<T: Item>(item: &T) -> String {
    format!("Delete this {}? \"{}\"", T::NOUN, preview(item.body()))
}

/// Removes the item with `id` once `confirm` agrees.
///
/// An unknown id is a no-op with a warning and does not prompt. A declined prompt leaves the
/// collection and the store untouched.
pub fn run<S, T, C>(
    store: &mut S,
    items: &mut Collection<T>,
    id: ItemId,
    confirm: &mut C,
) -> Result<CmdResult>
where
    S: KeyValueStore,
    T: Item,
    C: Confirm + ?Sized,
{
    let Some(item) = items.get(id) else {
        debug!(kind = T::NOUN, %id, "delete: no such item");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No such {}.", T::NOUN)));
        return Ok(result);
    };

    if !confirm.confirm(&prompt_for(item)) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let mut result = CmdResult::default();
    if let Some(removed) = items.remove(id) {
        items.save(store)?;
        debug!(kind = T::NOUN, %id, "deleted");
        result.affected.push(id);
        result.add_message(CmdMessage::success(format!(
            "Deleted {}: {}",
            T::NOUN,
            preview(removed.body())
        )));
    }
    Ok(result)
}
