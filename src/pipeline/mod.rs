//! Record pipeline: applies the field normalizers to table rows
//! column-by-column, evaluates repair and drop rules, and accumulates a
//! batch report.

pub mod profile;
pub mod report;
pub mod rules;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::fields::RawValue;

/// One raw table row, keyed by column name, with lineage back to where it
/// was read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Identifier of the dataset the row came from.
    pub source_id: String,
    /// Location of this row within its source (file + line, query offset, …).
    pub record_path: String,
    /// The row itself: an object mapping column names to cell values.
    pub record: serde_json::Value,
}

impl RawRecord {
    pub fn new(source_id: impl Into<String>, record_path: impl Into<String>, record: serde_json::Value) -> Self {
        Self {
            source_id: source_id.into(),
            record_path: record_path.into(),
            record,
        }
    }

    /// Reads one cell as a raw field value. An absent key is missing, the
    /// same as an explicit null.
    pub fn field(&self, column: &str) -> RawValue {
        match self.record.get(column) {
            None => RawValue::Missing,
            Some(value) => RawValue::from_json(value),
        }
    }
}

/// Outcome of normalizing one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value")]
pub enum FieldOutcome {
    /// The cell normalized to a canonical value.
    Known(serde_json::Value),
    /// The cell was legitimately absent.
    Unknown,
    /// The cell was present but matched no recognized grammar.
    Failed { reason: String },
}

impl FieldOutcome {
    pub fn is_unknown(&self) -> bool {
        matches!(self, FieldOutcome::Unknown)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FieldOutcome::Failed { .. })
    }
}

/// A normalized table row: one outcome per declared column, plus lineage
/// back to the raw record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub source_id: String,
    pub record_path: String,
    pub fields: BTreeMap<String, FieldOutcome>,
    pub normalized_at: DateTime<Utc>,
}

impl NormalizedRecord {
    pub fn outcome(&self, column: &str) -> Option<&FieldOutcome> {
        self.fields.get(column)
    }
}
