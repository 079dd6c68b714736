use async_trait::async_trait;

use crate::pipeline::report::BatchReport;
use crate::pipeline::NormalizedRecord;

/// Output boundary of the normalization use case. Records that survive the
/// drop rules are written one at a time; the report is written once, after
/// the batch completes.
#[async_trait]
pub trait NormalizeOutputPort: Send + Sync {
    async fn write_normalized_record(&self, record: &NormalizedRecord) -> anyhow::Result<()>;
    async fn write_report(&self, report: &BatchReport) -> anyhow::Result<()>;
}
