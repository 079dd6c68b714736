//! Pure field normalizers, one submodule per semantic field kind.
//!
//! Every function here keeps two outcomes strictly apart: `Unknown` (the
//! input was legitimately absent) and a `FieldError` (the input was present
//! but matched no recognized grammar). No I/O, no shared state; calls are
//! independent and a batch can run them in parallel with no coordination.

pub mod address;
pub mod contract;
pub mod count;
pub mod distance;
pub mod flag;
pub mod mass;
pub mod phone;
pub mod rating;
pub mod text;

pub use address::split_address;
pub use contract::normalize_contract;
pub use count::normalize_count;
pub use distance::normalize_distance;
pub use flag::normalize_flag;
pub use mass::normalize_mass;
pub use phone::normalize_phone;
pub use rating::normalize_rating;
pub use text::clean_text;

use serde::{Deserialize, Serialize};

/// Placeholder strings the source tables use where a value is absent. These
/// are sentinels, not data; they normalize to [`RawValue::Missing`].
const MISSING_SENTINELS: &[&str] = &["", "N/a", "NaN", "nan", "None"];

/// A raw field value as observed in one cell of the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawValue {
    /// The cell was absent, null, or carried a missing-value placeholder.
    Missing,
    /// The cell carried a textual value (which may still be malformed).
    Text(String),
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Converts one JSON cell into a raw field value. JSON null and the
    /// placeholder strings used for absence map to [`RawValue::Missing`];
    /// numbers and booleans are carried as their textual form.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Missing,
            serde_json::Value::String(s) => {
                if MISSING_SENTINELS.contains(&s.trim()) {
                    RawValue::Missing
                } else {
                    RawValue::Text(s.clone())
                }
            }
            serde_json::Value::Number(n) => RawValue::Text(n.to_string()),
            serde_json::Value::Bool(b) => RawValue::Text(b.to_string()),
            other => RawValue::Text(other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Missing => None,
            RawValue::Text(s) => Some(s.as_str()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// The canonical result of normalizing a field that may legitimately be
/// absent. Distinct from a parse failure by design: conflating the two would
/// change downstream counts of how many records carry real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalized<T> {
    Known(T),
    Unknown,
}

impl<T> Normalized<T> {
    pub fn known(self) -> Option<T> {
        match self {
            Normalized::Known(value) => Some(value),
            Normalized::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Normalized::Unknown)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        match self {
            Normalized::Known(value) => Normalized::Known(f(value)),
            Normalized::Unknown => Normalized::Unknown,
        }
    }
}
