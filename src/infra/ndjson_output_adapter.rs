use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::info;

use crate::app::ports::NormalizeOutputPort;
use crate::error::Result;
use crate::pipeline::report::BatchReport;
use crate::pipeline::NormalizedRecord;

/// File-based implementation of [`NormalizeOutputPort`]: normalized records
/// go to an NDJSON file, one record per line; the batch report goes to a
/// JSON file next to it.
pub struct NdjsonOutputAdapter {
    records: Mutex<BufWriter<File>>,
    report_path: PathBuf,
    report_pretty: bool,
}

impl NdjsonOutputAdapter {
    pub fn new(records_path: &Path, report_path: &Path, report_pretty: bool) -> Result<Self> {
        if let Some(dir) = records_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = report_path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        info!("Writing normalized records to {}", records_path.display());
        info!("Writing batch report to {}", report_path.display());

        let records_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(records_path)?;

        Ok(Self {
            records: Mutex::new(BufWriter::new(records_file)),
            report_path: report_path.to_path_buf(),
            report_pretty,
        })
    }
}

#[async_trait::async_trait]
impl NormalizeOutputPort for NdjsonOutputAdapter {
    async fn write_normalized_record(&self, record: &NormalizedRecord) -> anyhow::Result<()> {
        let json_line = serde_json::to_string(record)?;
        let mut writer = self.records.lock().await;
        writeln!(writer, "{}", json_line)?;
        Ok(())
    }

    async fn write_report(&self, report: &BatchReport) -> anyhow::Result<()> {
        // The report marks the end of the batch; flush the record stream
        // before writing it.
        self.records.lock().await.flush()?;

        let json = if self.report_pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        std::fs::write(&self.report_path, json)?;
        Ok(())
    }
}
