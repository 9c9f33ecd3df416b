use crate::commands::{resolve_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    positions: &[usize],
) -> Result<CmdResult> {
    // Resolve every position against the current display order before the
    // first removal shifts anything.
    let targets = positions
        .iter()
        .map(|&position| resolve_position(store, position).map(|id| (position, id)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for (position, id) in targets {
        let Some(record) = store.get(id).cloned() else {
            continue;
        };
        if store.delete_by_id(id)? {
            result.add_message(CmdMessage::success(format!(
                "Deleted ({}): {}",
                position, record.description
            )));
            result.affected_records.push(record);
        }
    }
    Ok(result)
}
