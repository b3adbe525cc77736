use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

use aisparq::export::{convert_file, ExportStats};
use aisparq::nmea::StreamSummary;
use aisparq::schema::AIS_PARQUET_EXTENSION;

use super::TuningArgs;

#[derive(Serialize)]
struct ConversionReport<'a> {
    input: &'a str,
    output: &'a str,
    stream: StreamSummary,
    export: ExportStats,
}

/// Convert an NMEA file to Parquet
pub fn run(input: PathBuf, output: Option<PathBuf>, json: bool, tuning: &TuningArgs) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let output = output.unwrap_or_else(|| input.with_extension(AIS_PARQUET_EXTENSION));
    let settings = tuning.resolve()?;

    info!("aisparq - NMEA to Parquet");
    info!("=========================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    info!("Profile: {}", tuning.profile);
    info!("Compression: {:?}", settings.export.writer.compression);
    info!("Row group size: {}", settings.export.max_rows_per_group);

    let (summary, stats) = convert_file(&input, &output, &settings.export, settings.stream)
        .with_context(|| format!("Conversion of {} failed", input.display()))?;

    if json {
        let report = ConversionReport {
            input: &input.to_string_lossy(),
            output: &output.to_string_lossy(),
            stream: summary,
            export: stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let file_size = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    println!("Conversion complete!");
    println!("  Lines read:        {}", summary.lines);
    println!("  Rejected lines:    {}", summary.rejected_lines);
    println!("  Messages:          {}", summary.messages);
    println!("  Rows written:      {}", stats.rows_ingested);
    println!("  Row groups:        {}", stats.row_groups_written);
    println!("  Unsupported kinds: {}", stats.skipped_unsupported);
    println!("  Malformed:         {}", stats.skipped_malformed);
    println!(
        "  Output file size:  {} bytes ({:.2} MB)",
        file_size,
        file_size as f64 / 1024.0 / 1024.0
    );

    Ok(())
}
