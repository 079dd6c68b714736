use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use fieldnorm::app::normalize_use_case::NormalizeUseCase;
use fieldnorm::config::Config;
use fieldnorm::infra::ndjson_output_adapter::NdjsonOutputAdapter;
use fieldnorm::logging;
use fieldnorm::pipeline::profile::ProfileRegistry;
use fieldnorm::pipeline::RawRecord;

#[derive(Parser)]
#[command(name = "fieldnorm")]
#[command(about = "Tabular field normalization pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an NDJSON record file against a dataset profile
    Normalize {
        /// Input NDJSON file, one JSON object per line
        #[arg(long)]
        input: PathBuf,
        /// Output NDJSON file for normalized records
        #[arg(long)]
        output: PathBuf,
        /// Dataset profile to apply. See `profiles` for the built-ins
        #[arg(long)]
        profile: String,
        /// Batch report path (defaults to the output path with .report.json)
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List the built-in dataset profiles
    Profiles,
}

/// Reads one raw record per non-empty input line. Lines that are not valid
/// JSON are skipped with a warning; a bad line must not sink the batch.
fn read_records(input: &PathBuf, source_id: &str) -> std::io::Result<Vec<RawRecord>> {
    let contents = std::fs::read_to_string(input)?;
    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record_path = format!("{}:{}", input.display(), index + 1);
        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(value) => records.push(RawRecord::new(source_id, record_path, value)),
            Err(e) => warn!("skipping unparseable line {}: {}", record_path, e),
        }
    }
    Ok(records)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let registry = ProfileRegistry::new(&config.normalize);

    match cli.command {
        Commands::Normalize {
            input,
            output,
            profile,
            report,
        } => {
            let profile = registry.get(&profile)?.clone();
            let report_path = report.unwrap_or_else(|| output.with_extension("report.json"));

            let span = tracing::info_span!("normalize", profile = %profile.id);
            let _enter = span.enter();

            let records = read_records(&input, &profile.id)?;
            info!("read {} records from {}", records.len(), input.display());

            let adapter = NdjsonOutputAdapter::new(&output, &report_path, config.normalize.report_pretty)?;
            let use_case = NormalizeUseCase::new(profile, Box::new(adapter));
            let result = use_case.normalize_batch(&records).await?;

            println!("\n📊 Normalization results for {}:", result.profile);
            println!("   Records in:  {}", result.records_in);
            println!("   Records out: {}", result.records_out);
            println!("   Dropped:     {}", result.dropped_total());
            println!("   Fields filled as inapplicable: {}", result.fields_filled);
            println!("   Field failures: {}", result.failures.len());
            println!("   Output file: {}", output.display());
            println!("   Report file: {}", report_path.display());

            if !result.failures.is_empty() {
                println!("\n⚠️  Field failures encountered:");
                for failure in &result.failures {
                    println!("   - {} {}: {}", failure.record_path, failure.column, failure.reason);
                }
            }
        }
        Commands::Profiles => {
            println!("Built-in dataset profiles:");
            for profile in registry.list() {
                println!("   {:<15} {}", profile.id, profile.description);
                for spec in &profile.columns {
                    println!("      {:<15} {:?}", spec.column, spec.kind);
                }
            }
        }
    }

    Ok(())
}
