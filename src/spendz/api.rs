//! # API Facade
//!
//! The single entry point for all spendz operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer and returns
//! structured `Result<CmdResult>` values; it performs no I/O and no
//! formatting of its own.
//!
//! `SpendzApi<B: StorageBackend>` is generic over the storage backend:
//! production wires in `FsBackend`, tests use `MemBackend` without touching
//! the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, RecordDraft, RecordPatch};
use crate::store::records::RecordStore;
use crate::store::StorageBackend;
use chrono::NaiveDate;

pub struct SpendzApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> SpendzApi<B> {
    /// Opens the store over the given backend, performing the one load per
    /// session.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(backend)?,
        })
    }

    /// Set when the persisted records existed but could not be read.
    /// UIs should surface this before the first mutation overwrites the blob.
    pub fn load_notice(&self) -> Option<&str> {
        self.store.load_notice()
    }

    /// The raw record snapshot, insertion order. For feeding summaries or
    /// custom views; mutation still goes through the methods below.
    pub fn records(&self) -> &[Record] {
        self.store.get_all()
    }

    pub fn add_record(&mut self, draft: RecordDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_records(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn edit_record(
        &mut self,
        position: usize,
        patch: RecordPatch,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, position, patch)
    }

    pub fn delete_records(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, positions)
    }

    pub fn summary(&self, window_days: u32, reference: NaiveDate) -> Result<commands::CmdResult> {
        commands::summary::run(&self.store, window_days, reference)
    }

    pub fn budget(&self, action: BudgetAction) -> Result<commands::CmdResult> {
        commands::budget::run(self.store.backend(), action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(self.store.backend(), action)
    }
}

pub use crate::commands::budget::BudgetAction;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, ListedRecord, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn draft() -> RecordDraft {
        RecordDraft {
            description: "Lunch at cafeteria".to_string(),
            amount: "12.5".to_string(),
            category: "Food".to_string(),
            date: "2025-10-14".to_string(),
        }
    }

    #[test]
    fn add_then_list_round_trips_through_the_facade() {
        let mut api = SpendzApi::open(MemBackend::new()).unwrap();
        api.add_record(draft()).unwrap();

        let result = api.list_records(None).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(api.records().len(), 1);
    }

    #[test]
    fn delete_then_list_is_empty() {
        let mut api = SpendzApi::open(MemBackend::new()).unwrap();
        api.add_record(draft()).unwrap();
        api.delete_records(&[1]).unwrap();
        assert!(api.list_records(None).unwrap().listed_records.is_empty());
    }

    #[test]
    fn budget_and_config_share_the_medium_without_colliding() {
        let mut api = SpendzApi::open(MemBackend::new()).unwrap();
        api.add_record(draft()).unwrap();
        api.budget(BudgetAction::Set(100.0)).unwrap();
        api.config(ConfigAction::Set("base-currency".into(), "EUR".into()))
            .unwrap();

        assert_eq!(api.records().len(), 1);
        assert_eq!(api.budget(BudgetAction::Show).unwrap().budget, Some(100.0));
    }
}
