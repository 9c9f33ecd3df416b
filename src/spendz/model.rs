use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One expense entry.
///
/// Records are created by [`RecordStore::create`](crate::store::records::RecordStore::create)
/// and updated by [`RecordStore::update`](crate::store::records::RecordStore::update),
/// never assembled ad hoc by presentation code. The store assigns `id` and the
/// timestamps; `id` is immutable for the record's lifetime and `created_at` is
/// set exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub(crate) fn new(description: String, amount: f64, category: String, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            description,
            amount,
            category,
            date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A caller-supplied field set proposed for creation, prior to validation.
///
/// All fields are raw user input; the store validates and parses them at the
/// boundary (`amount` and `date` are kept as strings so the validators can
/// reject malformed shapes like `01` or `2025-02-30` before any parsing).
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// A partial field set for updating an existing record.
///
/// Only fields that are `Some` are validated and merged; the rest of the
/// record is untouched. Even an empty patch refreshes `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}
