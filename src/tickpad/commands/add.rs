use crate::collection::Collection;
use crate::commands::{preview, CmdMessage, CmdResult};
use crate::error::{Result, TickpadError};
use crate::model::{IdGenerator, Item};
use crate::store::KeyValueStore;
use chrono::{DateTime, Local};
use tracing::debug;

/// Adds a new item built from `raw` at the front of `items`.
///
/// Blank input (after trimming) is ignored silently: nothing is stored and the
/// result carries no messages.
pub fn run<S: KeyValueStore, T: Item>(
    store: &mut S,
    items: &mut Collection<T>,
    ids: &mut IdGenerator,
    raw: &str,
    now: DateTime<Local>,
) -> Result<CmdResult> {
    let body = raw.trim();
    if body.is_empty() {
        debug!(kind = T::NOUN, "ignoring blank input");
        return Ok(CmdResult::default());
    }

    let id = ids
        .next(now.timestamp_millis())
        .ok_or_else(|| TickpadError::Store("No item ids left".into()))?;
    let item = T::create(id, body.to_string(), now.naive_local());
    items.insert_front(item);
    items.save(store)?;
    debug!(kind = T::NOUN, %id, "added");

    let mut result = CmdResult::default().with_affected(vec![id]);
    result.add_message(CmdMessage::success(format!(
        "Added {}: {}",
        T::NOUN,
        preview(body)
    )));
    Ok(result)
}
