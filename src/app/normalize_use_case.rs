use anyhow::Result;
use tracing::{debug, info, warn};

use crate::app::ports::NormalizeOutputPort;
use crate::pipeline::profile::DatasetProfile;
use crate::pipeline::report::BatchReport;
use crate::pipeline::{FieldOutcome, NormalizedRecord, RawRecord};

/// Use case for normalizing raw records against a dataset profile.
///
/// Each record is normalized column-by-column, repaired by the profile's
/// fill rules, checked against its drop rules, and written through the
/// output port. A field that fails to parse is tallied and surfaced in the
/// report; it never aborts the batch.
pub struct NormalizeUseCase {
    profile: DatasetProfile,
    output: Box<dyn NormalizeOutputPort>,
}

impl NormalizeUseCase {
    pub fn new(profile: DatasetProfile, output: Box<dyn NormalizeOutputPort>) -> Self {
        Self { profile, output }
    }

    /// Normalize a single raw record. Returns the normalized record, or
    /// `None` when a drop rule removed it from the output.
    pub async fn normalize_record(
        &self,
        record: &RawRecord,
        report: &mut BatchReport,
    ) -> Result<Option<NormalizedRecord>> {
        let mut normalized = self.profile.normalize_record(record);
        for (column, outcome) in &normalized.fields {
            if let FieldOutcome::Failed { reason } = outcome {
                warn!(
                    record = %record.record_path,
                    column = %column,
                    "field failed to normalize: {}",
                    reason
                );
            }
        }
        report.tally_record(&normalized);

        for rule in &self.profile.fill_rules {
            if rule.applies(record) {
                let filled = rule.apply(&mut normalized);
                if filled > 0 {
                    debug!(
                        record = %record.record_path,
                        trigger = %rule.trigger_column,
                        filled,
                        "filled inapplicable fields"
                    );
                    report.add_filled(filled);
                }
            }
        }

        for rule in &self.profile.drop_rules {
            if rule.matches(&normalized) {
                debug!(record = %record.record_path, rule = %rule.describe(), "record dropped");
                report.record_dropped(&rule.describe());
                return Ok(None);
            }
        }

        self.output.write_normalized_record(&normalized).await?;
        report.record_written();
        Ok(Some(normalized))
    }

    /// Normalize a batch of raw records and write the final report.
    pub async fn normalize_batch(&self, records: &[RawRecord]) -> Result<BatchReport> {
        let mut report = BatchReport::new(&self.profile.id);

        for record in records {
            self.normalize_record(record, &mut report).await?;
        }

        report.finish();
        self.output.write_report(&report).await?;

        info!(
            profile = %report.profile,
            records_in = report.records_in,
            records_out = report.records_out,
            dropped = report.dropped_total(),
            failures = report.failures.len(),
            "batch normalization finished"
        );
        Ok(report)
    }
}
