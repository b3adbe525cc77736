use anyhow::{Context, Result};
use std::path::PathBuf;

use aisparq::schema::{validate_schema, Column, KEY_CONVERTER_INFO, KEY_FORMAT_VERSION};

/// Display information about an AIS Parquet file
pub fn run(file: PathBuf) -> Result<()> {
    use parquet::arrow::parquet_to_arrow_schema;
    use parquet::file::reader::{FileReader, SerializedFileReader};
    use parquet::file::statistics::Statistics;
    use std::fs::File;

    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let file_handle = File::open(&file).context("Failed to open file")?;
    let reader = SerializedFileReader::new(file_handle).context("Failed to read Parquet file")?;

    let metadata = reader.metadata();
    let file_metadata = metadata.file_metadata();
    let schema_descr = file_metadata.schema_descr();

    println!("AIS Parquet File Information");
    println!("============================");
    println!("File: {}", file.display());
    println!();

    // File statistics
    println!("File Statistics:");
    println!("  Row groups: {}", metadata.num_row_groups());
    println!("  Total rows: {}", file_metadata.num_rows());
    println!("  Schema columns: {}", schema_descr.num_columns());
    println!();

    // Per row group breakdown, with the timestamp span taken from column statistics
    let timestamp_leaf = (0..schema_descr.num_columns())
        .find(|&i| schema_descr.column(i).name() == Column::Timestamp.name());

    println!("Row Groups:");
    for (i, row_group) in metadata.row_groups().iter().enumerate() {
        let span = timestamp_leaf
            .and_then(|leaf| row_group.column(leaf).statistics())
            .and_then(|stats| match stats {
                Statistics::Int64(values) => Some((values.min_opt().copied(), values.max_opt().copied())),
                _ => None,
            });

        match span {
            Some((Some(min), Some(max))) => println!(
                "  {:4}: {:>8} rows  {} .. {}",
                i,
                row_group.num_rows(),
                format_timestamp(min),
                format_timestamp(max)
            ),
            _ => println!("  {:4}: {:>8} rows", i, row_group.num_rows()),
        }
    }
    println!();

    // Key-value metadata
    let kv_metadata = file_metadata.key_value_metadata();
    if let Some(kv_metadata) = kv_metadata {
        println!("Metadata Keys:");
        for kv in kv_metadata.iter().filter(|kv| kv.key != "ARROW:schema") {
            let value_preview = kv
                .value
                .as_ref()
                .map(|v| {
                    if v.len() > 100 {
                        format!("{}... ({} bytes)", &v[..100], v.len())
                    } else {
                        v.clone()
                    }
                })
                .unwrap_or_else(|| "<null>".to_string());
            println!("  {}: {}", kv.key, value_preview);
        }

        for key in [KEY_FORMAT_VERSION, KEY_CONVERTER_INFO] {
            if !kv_metadata.iter().any(|kv| kv.key == key) {
                println!("  (missing) {}", key);
            }
        }
        println!();
    }

    // Layout check
    let arrow_schema = parquet_to_arrow_schema(schema_descr, kv_metadata)
        .context("Failed to convert Parquet schema")?;
    match validate_schema(&arrow_schema) {
        Ok(()) => println!("Layout: matches the AIS export table"),
        Err(e) => println!("Layout: MISMATCH ({})", e),
    }
    println!();

    // Schema
    println!("Schema:");
    for i in 0..schema_descr.num_columns() {
        let col = schema_descr.column(i);
        println!("  {:3}. {} ({})", i + 1, col.name(), col.physical_type());
    }

    Ok(())
}

fn format_timestamp(seconds: i64) -> String {
    chrono::DateTime::from_timestamp(seconds, 0)
        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| seconds.to_string())
}
