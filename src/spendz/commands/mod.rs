//! Business logic for each CLI operation.
//!
//! Command functions are pure with respect to I/O: they operate on the store
//! and backend through their traits, return a structured [`CmdResult`], and
//! never touch stdout, stderr, or the process exit code. The CLI layer owns
//! rendering.

use crate::error::{Result, SpendzError};
use crate::model::Record;
use crate::settings::DisplaySettings;
use crate::store::records::RecordStore;
use crate::store::StorageBackend;
use crate::summary::SpendSummary;
use uuid::Uuid;

pub mod add;
pub mod budget;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod summary;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A record paired with its 1-based position in the default display order
/// (insertion order).
#[derive(Debug, Clone)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<ListedRecord>,
    pub summary: Option<SpendSummary>,
    pub budget: Option<f64>,
    pub settings: Option<DisplaySettings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_summary(mut self, summary: SpendSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Resolves a 1-based display position to a record id against the current
/// display order.
pub fn resolve_position<B: StorageBackend>(
    store: &RecordStore<B>,
    position: usize,
) -> Result<Uuid> {
    position
        .checked_sub(1)
        .and_then(|i| store.get_all().get(i))
        .map(|r| r.id)
        .ok_or_else(|| SpendzError::Api(format!("No record at position {}", position)))
}
