use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::rules::{DropRule, InapplicableRule};
use super::{FieldOutcome, NormalizedRecord, RawRecord};
use crate::config::NormalizeConfig;
use crate::error::{CleanError, FieldError, Result};
use crate::fields::{self, Normalized, RawValue};

/// The semantic quantity a column carries, independent of which input
/// grammar encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Height in cm or feet/inches; canonical centimeters.
    Distance,
    /// Weight in kg or lbs; canonical kilograms.
    Mass,
    /// Possibly K-abbreviated hit count; canonical integer, missing is 0.
    Count,
    /// Contract period / free agent / loan marker.
    Contract,
    /// Phone number; canonical `DDD-DDD-DDDD` or empty.
    Phone,
    /// Star rating with a trailing ★ glyph.
    Rating,
    /// Yes/No flag; canonical boolean.
    Flag,
    /// Free text with typo noise around the ends.
    Text,
    /// Single-line address; canonical street/state/zip parts.
    Address,
}

impl FieldKind {
    /// Runs the field normalizer for this kind over one cell. Grammar
    /// violations become a `Failed` outcome carrying the reason; they are
    /// surfaced in the report rather than aborting anything.
    pub fn normalize(&self, raw: &RawValue) -> FieldOutcome {
        let result = match self {
            FieldKind::Distance => fields::normalize_distance(raw).map(known_or_unknown),
            FieldKind::Mass => fields::normalize_mass(raw).map(known_or_unknown),
            FieldKind::Count => fields::normalize_count(raw).map(|count| known(&count)),
            FieldKind::Contract => fields::normalize_contract(raw).map(known_or_unknown),
            FieldKind::Phone => Ok(known(&fields::normalize_phone(raw))),
            FieldKind::Rating => fields::normalize_rating(raw).map(known_or_unknown),
            FieldKind::Flag => fields::normalize_flag(raw).map(known_or_unknown),
            FieldKind::Text => Ok(known_or_unknown(fields::clean_text(raw))),
            FieldKind::Address => fields::split_address(raw).map(known_or_unknown),
        };
        result.unwrap_or_else(|error: FieldError| FieldOutcome::Failed {
            reason: error.to_string(),
        })
    }
}

fn known<T: Serialize>(value: &T) -> FieldOutcome {
    match serde_json::to_value(value) {
        Ok(json) => FieldOutcome::Known(json),
        Err(error) => FieldOutcome::Failed {
            reason: format!("canonical value not serializable: {}", error),
        },
    }
}

fn known_or_unknown<T: Serialize>(normalized: Normalized<T>) -> FieldOutcome {
    match normalized {
        Normalized::Known(value) => known(&value),
        Normalized::Unknown => FieldOutcome::Unknown,
    }
}

/// One column of a dataset profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub column: String,
    pub kind: FieldKind,
}

impl ColumnSpec {
    pub fn new(column: &str, kind: FieldKind) -> Self {
        Self {
            column: column.to_string(),
            kind,
        }
    }
}

/// Normalization plan for one dataset: which field kind each column
/// carries, plus the repair and drop rules that apply after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub id: String,
    pub description: String,
    pub columns: Vec<ColumnSpec>,
    pub fill_rules: Vec<InapplicableRule>,
    pub drop_rules: Vec<DropRule>,
}

impl DatasetProfile {
    /// Normalizes every declared column of one record. Undeclared columns
    /// are ignored; each declared column gets exactly one outcome.
    pub fn normalize_record(&self, record: &RawRecord) -> NormalizedRecord {
        let mut outcomes = BTreeMap::new();
        for spec in &self.columns {
            let raw = record.field(&spec.column);
            let outcome = spec.kind.normalize(&raw);
            debug!(
                column = %spec.column,
                record = %record.record_path,
                failed = outcome.is_failed(),
                "normalized field"
            );
            outcomes.insert(spec.column.clone(), outcome);
        }
        NormalizedRecord {
            source_id: record.source_id.clone(),
            record_path: record.record_path.clone(),
            fields: outcomes,
            normalized_at: Utc::now(),
        }
    }
}

/// Registry of dataset profiles, keyed by profile id.
pub struct ProfileRegistry {
    profiles: BTreeMap<String, DatasetProfile>,
}

impl ProfileRegistry {
    /// Creates a registry with the built-in profiles for the three source
    /// datasets: sales contacts, the street tree census, and the player
    /// roster table.
    pub fn new(config: &NormalizeConfig) -> Self {
        let mut registry = Self {
            profiles: BTreeMap::new(),
        };
        registry.register(contacts_profile());
        registry.register(tree_census_profile(&config.inapplicable_marker));
        registry.register(player_roster_profile());
        registry
    }

    /// Registers a profile, replacing any previous profile with the same id.
    pub fn register(&mut self, profile: DatasetProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn get(&self, profile_id: &str) -> Result<&DatasetProfile> {
        self.profiles
            .get(profile_id)
            .ok_or_else(|| CleanError::UnknownProfile(profile_id.to_string()))
    }

    pub fn list(&self) -> impl Iterator<Item = &DatasetProfile> {
        self.profiles.values()
    }
}

/// Sales contact list: typo-laden names, mixed phone formats, compound
/// addresses, yes/no flags. Do-not-contact records and records without a
/// usable phone number are removed from the output.
fn contacts_profile() -> DatasetProfile {
    DatasetProfile {
        id: "contacts".to_string(),
        description: "Sales contact list for call follow-up".to_string(),
        columns: vec![
            ColumnSpec::new("first_name", FieldKind::Text),
            ColumnSpec::new("last_name", FieldKind::Text),
            ColumnSpec::new("phone_number", FieldKind::Phone),
            ColumnSpec::new("address", FieldKind::Address),
            ColumnSpec::new("paying_customer", FieldKind::Flag),
            ColumnSpec::new("do_not_contact", FieldKind::Flag),
        ],
        fill_rules: vec![],
        drop_rules: vec![
            DropRule::FlagTrue {
                column: "do_not_contact".to_string(),
            },
            DropRule::EmptyValue {
                column: "phone_number".to_string(),
            },
        ],
    }
}

/// Street tree census: for stumps and dead trees the condition columns are
/// inapplicable rather than unobserved, so their absent values are filled
/// with the configured marker.
fn tree_census_profile(inapplicable_marker: &str) -> DatasetProfile {
    let dependent_columns = ["health", "spc_latin", "steward", "sidewalk", "problems"];
    DatasetProfile {
        id: "tree_census".to_string(),
        description: "Street tree census condition subset".to_string(),
        columns: [
            "status",
            "health",
            "spc_latin",
            "steward",
            "sidewalk",
            "problems",
        ]
        .iter()
        .map(|&column| ColumnSpec::new(column, FieldKind::Text))
        .collect(),
        fill_rules: vec![InapplicableRule {
            trigger_column: "status".to_string(),
            trigger_values: vec!["Stump".to_string(), "Dead".to_string()],
            dependent_columns: dependent_columns.iter().map(|c| c.to_string()).collect(),
            placeholder: inapplicable_marker.to_string(),
        }],
        drop_rules: vec![],
    }
}

/// Player roster table: heights and weights in two unit systems, compound
/// contract strings, star-rating glyphs, K-abbreviated hit counts.
fn player_roster_profile() -> DatasetProfile {
    DatasetProfile {
        id: "player_roster".to_string(),
        description: "Player roster with mixed-unit measurements".to_string(),
        columns: vec![
            ColumnSpec::new("club", FieldKind::Text),
            ColumnSpec::new("contract", FieldKind::Contract),
            ColumnSpec::new("height", FieldKind::Distance),
            ColumnSpec::new("weight", FieldKind::Mass),
            ColumnSpec::new("hits", FieldKind::Count),
            ColumnSpec::new("weak_foot", FieldKind::Rating),
            ColumnSpec::new("skill_moves", FieldKind::Rating),
            ColumnSpec::new("reputation", FieldKind::Rating),
        ],
        fill_rules: vec![],
        drop_rules: vec![],
    }
}
