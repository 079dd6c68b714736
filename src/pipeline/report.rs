use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{FieldOutcome, NormalizedRecord};

/// Per-column tally of normalization outcomes, counted before repair rules
/// run so the report reflects what the source data actually carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTally {
    pub known: u64,
    pub unknown: u64,
    pub failed: u64,
}

/// One surfaced field failure: which record, which column, and why. The
/// caller decides whether to skip, log, or halt on these; the pipeline
/// itself only reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub record_path: String,
    pub column: String,
    pub reason: String,
}

/// Summary of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub profile: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub records_in: u64,
    pub records_out: u64,
    /// Drop-rule description → number of records removed by it.
    pub records_dropped: BTreeMap<String, u64>,
    /// Fields filled with the inapplicable marker by repair rules.
    pub fields_filled: u64,
    pub columns: BTreeMap<String, ColumnTally>,
    pub failures: Vec<FieldFailure>,
}

impl BatchReport {
    pub fn new(profile: &str) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            profile: profile.to_string(),
            started_at: Utc::now(),
            finished_at: None,
            records_in: 0,
            records_out: 0,
            records_dropped: BTreeMap::new(),
            fields_filled: 0,
            columns: BTreeMap::new(),
            failures: Vec::new(),
        }
    }

    /// Tallies every field outcome of one normalized record and collects
    /// its failures.
    pub fn tally_record(&mut self, record: &NormalizedRecord) {
        self.records_in += 1;
        for (column, outcome) in &record.fields {
            let tally = self.columns.entry(column.clone()).or_default();
            match outcome {
                FieldOutcome::Known(_) => tally.known += 1,
                FieldOutcome::Unknown => tally.unknown += 1,
                FieldOutcome::Failed { reason } => {
                    tally.failed += 1;
                    self.failures.push(FieldFailure {
                        record_path: record.record_path.clone(),
                        column: column.clone(),
                        reason: reason.clone(),
                    });
                }
            }
        }
    }

    pub fn record_dropped(&mut self, rule_description: &str) {
        *self.records_dropped.entry(rule_description.to_string()).or_default() += 1;
    }

    pub fn record_written(&mut self) {
        self.records_out += 1;
    }

    pub fn add_filled(&mut self, count: usize) {
        self.fields_filled += count as u64;
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn dropped_total(&self) -> u64 {
        self.records_dropped.values().sum()
    }
}
