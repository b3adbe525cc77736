use std::fs::File;
use std::io::Cursor;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::Int32Type;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::file::reader::{FileReader, SerializedFileReader};

use super::*;
use crate::export::{ColumnBufferSet, Scalar};
use crate::schema::{
    AisSchema, Column, TextWidths, AIS_FORMAT_VERSION, KEY_CONVERTER_INFO, KEY_FORMAT_VERSION,
};

fn schema() -> Arc<AisSchema> {
    Arc::new(AisSchema::new(TextWidths::default()).unwrap())
}

/// A batch of `rows` rows whose mmsi column counts up from `first_mmsi`.
fn batch(schema: &Arc<AisSchema>, rows: usize, first_mmsi: i32) -> RecordBatch {
    let mut buffers = ColumnBufferSet::new(schema.clone(), rows.max(1)).unwrap();
    for row in 0..rows {
        buffers.clear_row(row).unwrap();
        buffers
            .set(row, Column::Timestamp, Scalar::Timestamp(1_614_556_800 + row as i64))
            .unwrap();
        buffers.set(row, Column::Mmsi, Scalar::from(first_mmsi + row as i32)).unwrap();
        buffers.set(row, Column::MessageType, Scalar::from(1)).unwrap();
        buffers.text_buffer(row, Column::CallSign).unwrap()[..4].copy_from_slice(b"ABCD");
    }
    buffers.truncate(rows);
    buffers.to_record_batch().unwrap()
}

#[test]
fn test_one_batch_per_row_group() -> Result<(), WriterError> {
    let schema = schema();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("groups.parquet");

    let mut writer =
        ParquetContainerWriter::create(&path, schema.arrow_schema(), &WriterConfig::default(), 10)?;
    writer.write_row_group(&batch(&schema, 10, 1000))?;
    writer.write_row_group(&batch(&schema, 10, 2000))?;
    writer.write_row_group(&batch(&schema, 3, 3000))?;
    assert_eq!(writer.stats().row_groups_written, 3);
    assert_eq!(writer.stats().rows_written, 23);

    let stats = writer.close()?;
    assert_eq!(stats.row_groups_written, 3);
    assert_eq!(stats.rows_written, 23);
    assert!(stats.file_size_bytes > 0);

    let reader = SerializedFileReader::new(File::open(&path)?)?;
    let sizes: Vec<i64> = reader
        .metadata()
        .row_groups()
        .iter()
        .map(|rg| rg.num_rows())
        .collect();
    assert_eq!(sizes, vec![10, 10, 3]);
    Ok(())
}

#[test]
fn test_footer_metadata_written() -> Result<(), WriterError> {
    let schema = schema();
    let mut writer = ParquetContainerWriter::new(
        Vec::new(),
        schema.arrow_schema(),
        &WriterConfig::default(),
        100,
    )?;
    writer.write_row_group(&batch(&schema, 5, 1))?;
    let bytes = writer.finish_into_inner()?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("footer.parquet");
    std::fs::write(&path, bytes)?;
    let reader = SerializedFileReader::new(File::open(&path)?)?;
    let kv = reader
        .metadata()
        .file_metadata()
        .key_value_metadata()
        .cloned()
        .unwrap_or_default();
    let value = |key: &str| {
        kv.iter()
            .find(|kv| kv.key == key)
            .and_then(|kv| kv.value.clone())
    };
    assert_eq!(value(KEY_FORMAT_VERSION).as_deref(), Some(AIS_FORMAT_VERSION));
    assert!(value(KEY_CONVERTER_INFO).unwrap().starts_with("aisparq "));
    Ok(())
}

#[test]
fn test_empty_batch_is_skipped() -> Result<(), WriterError> {
    let schema = schema();
    let mut writer = ParquetContainerWriter::new(
        Cursor::new(Vec::new()),
        schema.arrow_schema(),
        &WriterConfig::fast_write(),
        100,
    )?;
    writer.write_row_group(&batch(&schema, 0, 0))?;
    writer.write_row_group(&batch(&schema, 2, 0))?;

    let stats = writer.close()?;
    assert_eq!(stats.row_groups_written, 1);
    assert_eq!(stats.rows_written, 2);
    Ok(())
}

#[test]
fn test_column_count_mismatch_rejected() {
    let schema = schema();
    let mut writer = ParquetContainerWriter::new(
        Vec::new(),
        schema.arrow_schema(),
        &WriterConfig::default(),
        100,
    )
    .unwrap();

    let full = batch(&schema, 2, 0);
    let projected = full.project(&[0, 1, 2]).unwrap();
    let err = writer.write_row_group(&projected).unwrap_err();
    assert!(matches!(err, WriterError::InvalidData(_)));
    assert_eq!(writer.stats().row_groups_written, 0);
}

#[test]
fn test_values_survive_round_trip() -> Result<(), WriterError> {
    let schema = schema();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("values.parquet");

    let mut writer = ParquetContainerWriter::create(
        &path,
        schema.arrow_schema(),
        &WriterConfig::max_compression(),
        4,
    )?;
    let written = batch(&schema, 4, 500);
    writer.write_row_group(&written)?;
    writer.close()?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path)?)?.build()?;
    let batches: Vec<RecordBatch> = reader.collect::<Result<_, _>>()?;
    assert_eq!(batches.len(), 1);
    let read = &batches[0];
    assert_eq!(read.num_rows(), 4);
    assert_eq!(read.num_columns(), written.num_columns());

    let mmsi = read.column(Column::Mmsi.index()).as_primitive::<Int32Type>();
    assert_eq!(mmsi.values().to_vec(), vec![500, 501, 502, 503]);
    let latitude = read.column(Column::Latitude.index());
    assert_eq!(latitude.null_count(), 4);
    let call_sign = read.column(Column::CallSign.index()).as_fixed_size_binary();
    assert_eq!(call_sign.value(3), b"ABCD\0\0\0");
    Ok(())
}

#[test]
fn test_compression_type_parse() {
    assert_eq!(CompressionType::parse("zstd"), Some(CompressionType::Zstd(3)));
    assert_eq!(CompressionType::parse("ZSTD:9"), Some(CompressionType::Zstd(9)));
    assert_eq!(CompressionType::parse("snappy"), Some(CompressionType::Snappy));
    assert_eq!(CompressionType::parse("none"), Some(CompressionType::Uncompressed));
    assert_eq!(CompressionType::parse("zstd:high"), None);
    assert_eq!(CompressionType::parse("lz4"), None);
}

#[test]
fn test_writer_config_presets() {
    let default = WriterConfig::default();
    assert_eq!(default.compression, CompressionType::Zstd(3));
    assert!(default.write_statistics);

    assert_eq!(WriterConfig::max_compression().compression, CompressionType::Zstd(22));
    assert_eq!(WriterConfig::fast_write().compression, CompressionType::Snappy);
}

#[test]
fn test_writer_stats_display() {
    let stats = WriterStats {
        row_groups_written: 3,
        rows_written: 250_000,
        file_size_bytes: 1024,
    };
    assert_eq!(stats.to_string(), "Wrote 250000 rows in 3 row groups");
}
