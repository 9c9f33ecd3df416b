//! The two auxiliary blobs that live beside the record collection: a numeric
//! budget threshold and the display settings. Both share the storage medium
//! with the records but are independently keyed and independently owned;
//! the record store never touches them.

use crate::error::Result;
use crate::store::{keys, StorageBackend};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_CURRENCY: &str = "USD";

/// A spending threshold the summary screen warns against.
/// Persisted as a bare number under its own key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget(pub f64);

impl Budget {
    /// Load the budget, if one has been set. A threshold that fails to parse
    /// is treated as unset.
    pub fn load<B: StorageBackend>(backend: &B) -> Result<Option<Self>> {
        match backend.read(keys::BUDGET)? {
            None => Ok(None),
            Some(payload) => Ok(serde_json::from_str::<f64>(&payload).ok().map(Budget)),
        }
    }

    pub fn save<B: StorageBackend>(&self, backend: &B) -> Result<()> {
        backend.write(keys::BUDGET, &serde_json::to_string(&self.0)?)
    }

    pub fn clear<B: StorageBackend>(backend: &B) -> Result<()> {
        backend.remove(keys::BUDGET)
    }
}

/// Display settings: the currency code amounts are shown in, plus two
/// user-supplied conversion rates. The rates are taken at face value:
/// format-checked at the CLI, never verified against any market data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// Units of EUR per one unit of the base currency.
    #[serde(default = "default_rate")]
    pub rate_eur: f64,

    /// Units of GBP per one unit of the base currency.
    #[serde(default = "default_rate")]
    pub rate_gbp: f64,
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

fn default_rate() -> f64 {
    1.0
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            rate_eur: default_rate(),
            rate_gbp: default_rate(),
        }
    }
}

impl DisplaySettings {
    /// Load settings, or defaults if none have been saved yet.
    pub fn load<B: StorageBackend>(backend: &B) -> Result<Self> {
        match backend.read(keys::SETTINGS)? {
            None => Ok(Self::default()),
            Some(payload) => Ok(serde_json::from_str(&payload)?),
        }
    }

    pub fn save<B: StorageBackend>(&self, backend: &B) -> Result<()> {
        backend.write(keys::SETTINGS, &serde_json::to_string_pretty(self)?)
    }
}
