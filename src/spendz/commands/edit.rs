use crate::commands::{resolve_position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordPatch;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    position: usize,
    patch: RecordPatch,
) -> Result<CmdResult> {
    let id = resolve_position(store, position)?;
    let touched_fields = !patch.is_empty();
    let record = store.update(id, patch)?;

    let mut result = CmdResult::default();
    if touched_fields {
        result.add_message(CmdMessage::success(format!(
            "Updated ({}): {}",
            position, record.description
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for ({}): {}",
            position, record.description
        )));
    }
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::SpendzError;
    use crate::model::RecordDraft;
    use crate::store::mem_backend::MemBackend;

    fn seeded_store() -> RecordStore<MemBackend> {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        add::run(
            &mut store,
            RecordDraft {
                description: "Lunch at cafeteria".to_string(),
                amount: "12.5".to_string(),
                category: "Food".to_string(),
                date: "2025-10-14".to_string(),
            },
        )
        .unwrap();
        store
    }

    #[test]
    fn patches_a_single_field() {
        let mut store = seeded_store();
        let result = run(
            &mut store,
            1,
            RecordPatch {
                category: Some("Eating Out".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(result.affected_records[0].category, "Eating Out");
        assert_eq!(result.affected_records[0].description, "Lunch at cafeteria");
    }

    #[test]
    fn invalid_patch_field_reaches_the_caller() {
        let mut store = seeded_store();
        let result = run(
            &mut store,
            1,
            RecordPatch {
                amount: Some("-3".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(
            result,
            Err(SpendzError::Validation { field: "amount", .. })
        ));
    }

    #[test]
    fn unknown_position_is_an_api_error() {
        let mut store = seeded_store();
        let result = run(&mut store, 9, RecordPatch::default());
        assert!(matches!(result, Err(SpendzError::Api(_))));
    }

    #[test]
    fn empty_patch_reports_nothing_to_change() {
        let mut store = seeded_store();
        let result = run(&mut store, 1, RecordPatch::default()).unwrap();
        assert!(result.messages[0].content.contains("Nothing to change"));
    }
}
