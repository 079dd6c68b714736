use serde::{Deserialize, Serialize};

use super::{FieldOutcome, NormalizedRecord, RawRecord};

/// Declarative repair rule: when a categorical status column says a record
/// is inapplicable (a dead tree has no health), dependent columns that
/// normalized to Unknown are filled with the inapplicable marker.
///
/// Evaluated per-record against the trigger column's raw value, so it
/// generalizes to new data — there are no literal row-identifier lists
/// anywhere in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InapplicableRule {
    pub trigger_column: String,
    pub trigger_values: Vec<String>,
    pub dependent_columns: Vec<String>,
    pub placeholder: String,
}

impl InapplicableRule {
    pub fn applies(&self, record: &RawRecord) -> bool {
        match record.field(&self.trigger_column).as_text() {
            Some(value) => self.trigger_values.iter().any(|trigger| trigger == value.trim()),
            None => false,
        }
    }

    /// Fills dependent Unknown outcomes with the placeholder. Known and
    /// Failed outcomes are left alone: a parse failure is not an absence.
    /// Returns the number of fields filled.
    pub fn apply(&self, normalized: &mut NormalizedRecord) -> usize {
        let mut filled = 0;
        for column in &self.dependent_columns {
            if let Some(outcome) = normalized.fields.get_mut(column) {
                if outcome.is_unknown() {
                    *outcome = FieldOutcome::Known(serde_json::Value::String(self.placeholder.clone()));
                    filled += 1;
                }
            }
        }
        filled
    }
}

/// Predicate that removes a record from the output after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DropRule {
    /// Drop when a flag column normalized to true (do-not-contact records).
    FlagTrue { column: String },
    /// Drop when a column normalized to an empty string (records with no
    /// usable contact number).
    EmptyValue { column: String },
}

impl DropRule {
    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        match self {
            DropRule::FlagTrue { column } => matches!(
                record.outcome(column),
                Some(FieldOutcome::Known(serde_json::Value::Bool(true)))
            ),
            DropRule::EmptyValue { column } => matches!(
                record.outcome(column),
                Some(FieldOutcome::Known(serde_json::Value::String(s))) if s.is_empty()
            ),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DropRule::FlagTrue { column } => format!("{} is set", column),
            DropRule::EmptyValue { column } => format!("{} is empty", column),
        }
    }
}
