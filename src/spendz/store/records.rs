use super::{keys, StorageBackend};
use crate::error::{Result, SpendzError};
use crate::model::{Record, RecordDraft, RecordPatch};
use crate::validate::{
    normalize_description, validate_amount, validate_category, validate_date,
    validate_description, ValidationFailure,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

fn invalid(field: &'static str, failure: ValidationFailure) -> SpendzError {
    SpendzError::Validation {
        field,
        reason: failure.to_string(),
    }
}

/// The canonical in-memory record collection.
///
/// Constructed once per process via [`RecordStore::open`], which performs the
/// single load from the backend. Every mutation re-validates its inputs
/// (callers are expected to have validated already; the store checks again),
/// applies the change, and persists the full collection before returning.
/// If the backend rejects the write, the in-memory change is rolled back and
/// the error propagates, so the collection never silently diverges from disk.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
    load_notice: Option<String>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Loads the record collection from the backend.
    ///
    /// An absent blob yields an empty collection. A blob that fails to parse
    /// also yields an empty collection, but additionally sets a
    /// [`load_notice`](Self::load_notice) the caller should surface: the
    /// two cases are deliberately distinguishable, and the unreadable payload
    /// stays on disk untouched until the next successful save replaces it.
    pub fn open(backend: B) -> Result<Self> {
        let (records, load_notice) = match backend.read(keys::RECORDS)? {
            None => (Vec::new(), None),
            Some(payload) => match serde_json::from_str::<Vec<Record>>(&payload) {
                Ok(records) => (records, None),
                Err(e) => (
                    Vec::new(),
                    Some(format!(
                        "stored records could not be read ({}); starting empty. \
                         The unreadable data stays on disk until the next save.",
                        e
                    )),
                ),
            },
        };
        Ok(Self {
            backend,
            records,
            load_notice,
        })
    }

    /// Set when `open` found a records blob it could not parse.
    pub fn load_notice(&self) -> Option<&str> {
        self.load_notice.as_deref()
    }

    /// The current collection, in insertion order. Read-only: all mutation
    /// goes through [`create`](Self::create), [`update`](Self::update), and
    /// [`delete_by_id`](Self::delete_by_id).
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The underlying backend, for collaborators that own sibling blobs
    /// (budget, display settings) in the same medium.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validates the draft, assigns identity and timestamps, appends, and
    /// persists. On any validation failure nothing is mutated or persisted.
    pub fn create(&mut self, draft: RecordDraft) -> Result<Record> {
        validate_description(&draft.description).map_err(|f| invalid("description", f))?;
        validate_amount(&draft.amount).map_err(|f| invalid("amount", f))?;
        validate_category(&draft.category).map_err(|f| invalid("category", f))?;
        validate_date(&draft.date).map_err(|f| invalid("date", f))?;

        let record = Record::new(
            normalize_description(&draft.description),
            parse_amount(&draft.amount)?,
            draft.category.trim().to_string(),
            parse_date(&draft.date)?,
        );

        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// Removes the record with the given id, if present, and persists.
    ///
    /// Returns whether a record was removed; an unknown id is a no-op that
    /// returns `Ok(false)`, not an error. If the save fails, the record is
    /// re-inserted at its original position before the error propagates.
    pub fn delete_by_id(&mut self, id: Uuid) -> Result<bool> {
        let Some(position) = self.records.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        let removed = self.records.remove(position);
        if let Err(e) = self.persist() {
            self.records.insert(position, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Validates the fields present in `patch`, merges them into the record,
    /// refreshes `updated_at`, and persists.
    ///
    /// All present fields are validated and parsed before any of them is
    /// merged, so a failing patch leaves the record untouched; there is no
    /// partial merge. An empty patch still refreshes `updated_at`. If the
    /// save fails, the previous record is restored before the error
    /// propagates.
    pub fn update(&mut self, id: Uuid, patch: RecordPatch) -> Result<Record> {
        let description = match &patch.description {
            Some(value) => {
                validate_description(value).map_err(|f| invalid("description", f))?;
                Some(normalize_description(value))
            }
            None => None,
        };
        let amount = match &patch.amount {
            Some(value) => {
                validate_amount(value).map_err(|f| invalid("amount", f))?;
                Some(parse_amount(value)?)
            }
            None => None,
        };
        let category = match &patch.category {
            Some(value) => {
                validate_category(value).map_err(|f| invalid("category", f))?;
                Some(value.trim().to_string())
            }
            None => None,
        };
        let date = match &patch.date {
            Some(value) => {
                validate_date(value).map_err(|f| invalid("date", f))?;
                Some(parse_date(value)?)
            }
            None => None,
        };

        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(SpendzError::RecordNotFound(id))?;
        let previous = self.records[position].clone();

        let record = &mut self.records[position];
        if let Some(description) = description {
            record.description = description;
        }
        if let Some(amount) = amount {
            record.amount = amount;
        }
        if let Some(category) = category {
            record.category = category;
        }
        if let Some(date) = date {
            record.date = date;
        }
        record.updated_at = Utc::now();
        let updated = record.clone();

        if let Err(e) = self.persist() {
            self.records[position] = previous;
            return Err(e);
        }
        Ok(updated)
    }

    /// Serializes the full collection and writes it under the records key.
    /// Called after every successful mutation; never partial.
    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        self.backend.write(keys::RECORDS, &payload)
    }
}

fn parse_amount(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("amount", ValidationFailure::MalformedAmount))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| invalid("date", ValidationFailure::MalformedDate))
}
