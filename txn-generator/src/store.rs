use std::fs;
use std::path::Path;

use log::{debug, error, info, warn};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::transaction::Transaction;

pub const DEFAULT_STORE_PATH: &str = "db.json";

const TRANSACTIONS_KEY: &str = "transactions";

/// The JSON document kept on disk: `{ "transactions": [ ... ] }`.
///
/// Records already in the file are held as raw JSON so they are written back exactly as they
/// were read, even when they do not match the shape of a generated [`Transaction`]. Any other
/// top-level keys are carried along untouched, in their original order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StoreDocument {
    pub(crate) transactions: Vec<Value>,
    pub(crate) other: Map<String, Value>,
    /// Where `transactions` sits among the top-level keys
    pub(crate) position: usize,
}

impl Serialize for StoreDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.other.len() + 1))?;
        for (idx, (key, value)) in self.other.iter().enumerate() {
            if idx == self.position {
                state.serialize_entry(TRANSACTIONS_KEY, &self.transactions)?;
            }
            state.serialize_entry(key, value)?;
        }
        if self.position >= self.other.len() {
            state.serialize_entry(TRANSACTIONS_KEY, &self.transactions)?;
        }
        state.end()
    }
}

impl StoreDocument {
    #[must_use]
    pub fn new(transactions: Vec<Value>) -> Self {
        StoreDocument {
            transactions,
            other: Map::new(),
            position: 0,
        }
    }

    #[must_use]
    pub fn transactions(&self) -> &[Value] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Appends `transactions` after the existing records, returning how many were added.
    ///
    /// # Errors
    /// Errors when a transaction cannot be converted to JSON. Records converted before the
    /// failure are kept.
    pub fn append(
        &mut self,
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> Result<usize, StoreError> {
        let before = self.transactions.len();
        for transaction in transactions {
            let value = serde_json::to_value(transaction).map_err(StoreError::Serialize)?;
            self.transactions.push(value);
        }
        Ok(self.transactions.len() - before)
    }

    /// Records that have the shape of a [`Transaction`]; anything else is skipped.
    pub fn typed_transactions(&self) -> impl Iterator<Item = Transaction> + '_ {
        self.transactions
            .iter()
            .filter_map(|value| {
                Transaction::deserialize(value)
                    .map_err(|e| debug!("Skipping non-conforming record: {}", e))
                    .ok()
            })
    }
}

/// Reads the store at `path`.
///
/// # Errors
/// 1. `NotFound` when nothing exists at `path`
/// 2. `InvalidJson` when the content does not parse
/// 3. `UnexpectedStructure` when the content is not an object holding a `transactions` list
/// 4. `IoError` for any other read failure
pub fn load(path: impl AsRef<Path>) -> Result<StoreDocument, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| StoreError::from_read(path.to_owned(), e))?;
    parse_document(path, &raw)
}

/// Reads the store at `path`, falling back to an empty document on any failure.
/// Each failure is logged, never returned.
pub fn load_or_default(path: impl AsRef<Path>) -> StoreDocument {
    let path = path.as_ref();
    match load(path) {
        Ok(document) => document,
        Err(StoreError::NotFound(_)) => {
            info!(
                "File {} not found. Creating a new one with empty transactions.",
                path.display()
            );
            StoreDocument::default()
        }
        Err(StoreError::InvalidJson(e)) => {
            error!(
                "Failed to parse {}. JSON is invalid: {}",
                path.display(),
                e
            );
            StoreDocument::default()
        }
        Err(e @ StoreError::UnexpectedStructure(_)) => {
            warn!("{}. Initializing with empty transactions.", e);
            StoreDocument::default()
        }
        Err(e) => {
            error!("Error loading {}: {}", path.display(), e);
            StoreDocument::default()
        }
    }
}

/// Overwrites `path` with `document`, pretty printed with 2-space indentation.
///
/// # Errors
/// `PermissionDenied` when the file may not be written, `IoError` for any other write failure.
pub fn save(path: impl AsRef<Path>, document: &StoreDocument) -> Result<(), StoreError> {
    let path = path.as_ref();
    let rendered = serde_json::to_string_pretty(document).map_err(StoreError::Serialize)?;
    fs::write(path, rendered).map_err(|e| StoreError::from_write(path.to_owned(), e))
}

fn parse_document(path: &Path, raw: &str) -> Result<StoreDocument, StoreError> {
    let value: Value = serde_json::from_str(raw).map_err(StoreError::InvalidJson)?;
    let Value::Object(mut other) = value else {
        return Err(StoreError::UnexpectedStructure(path.to_owned()));
    };
    let position = other
        .keys()
        .position(|key| key == TRANSACTIONS_KEY)
        .unwrap_or_default();
    match other.shift_remove(TRANSACTIONS_KEY) {
        Some(Value::Array(transactions)) => Ok(StoreDocument {
            transactions,
            other,
            position,
        }),
        _ => Err(StoreError::UnexpectedStructure(path.to_owned())),
    }
}
