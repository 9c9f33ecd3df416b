use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordDraft;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    draft: RecordDraft,
) -> Result<CmdResult> {
    let record = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recorded {}: {} ({:.2}, {})",
        record.date, record.description, record.amount, record.category
    )));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendzError;
    use crate::store::mem_backend::MemBackend;

    fn draft(description: &str, amount: &str) -> RecordDraft {
        RecordDraft {
            description: description.to_string(),
            amount: amount.to_string(),
            category: "Food".to_string(),
            date: "2025-10-14".to_string(),
        }
    }

    #[test]
    fn adds_a_record_and_reports_success() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        let result = run(&mut store, draft("Lunch at cafeteria", "12.5")).unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(store.len(), 1);
        assert!(result.messages[0].content.contains("Lunch at cafeteria"));
    }

    #[test]
    fn rejects_an_invalid_draft() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        let result = run(&mut store, draft("Lunch at cafeteria", "12.555"));

        assert!(matches!(
            result,
            Err(SpendzError::Validation { field: "amount", .. })
        ));
        assert!(store.is_empty());
    }
}
