use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::ArrowWriter;

use crate::schema::{AIS_FORMAT_VERSION, KEY_CONVERTER_INFO, KEY_FORMAT_VERSION};

use super::config::WriterConfig;
use super::container::ContainerWriter;
use super::error::WriterError;
use super::stats::WriterStats;

/// Footer key-value metadata written to every exported file.
pub fn footer_metadata() -> HashMap<String, String> {
    let mut metadata = HashMap::new();
    metadata.insert(KEY_FORMAT_VERSION.to_string(), AIS_FORMAT_VERSION.to_string());
    metadata.insert(
        KEY_CONVERTER_INFO.to_string(),
        format!("aisparq {}", env!("CARGO_PKG_VERSION")),
    );
    metadata
}

/// Streaming Parquet writer where every handed-off batch is one row group
pub struct ParquetContainerWriter<W: Write + Send> {
    writer: ArrowWriter<W>,
    schema: Arc<Schema>,
    row_groups_written: usize,
    rows_written: u64,
}

impl ParquetContainerWriter<File> {
    /// Create a writer to a file path
    pub fn create<P: AsRef<Path>>(
        path: P,
        schema: Arc<Schema>,
        config: &WriterConfig,
        max_row_group_size: usize,
    ) -> Result<Self, WriterError> {
        let file = File::create(path)?;
        Self::new(file, schema, config, max_row_group_size)
    }
}

impl<W: Write + Send> ParquetContainerWriter<W> {
    /// Create a writer to any Write implementation
    pub fn new(
        writer: W,
        schema: Arc<Schema>,
        config: &WriterConfig,
        max_row_group_size: usize,
    ) -> Result<Self, WriterError> {
        let props = config.to_writer_properties(&footer_metadata(), max_row_group_size);
        let arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

        Ok(Self {
            writer: arrow_writer,
            schema,
            row_groups_written: 0,
            rows_written: 0,
        })
    }

    /// Schema declared at construction
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Counters so far; the byte size is only known after close
    pub fn stats(&self) -> WriterStats {
        WriterStats {
            row_groups_written: self.row_groups_written,
            rows_written: self.rows_written,
            file_size_bytes: 0,
        }
    }

    /// Finalize the file and return the underlying writer
    ///
    /// This is useful when the writer is backed by an in-memory buffer and you need
    /// to access the written data.
    pub fn finish_into_inner(self) -> Result<W, WriterError> {
        Ok(self.writer.into_inner()?)
    }
}

impl<W: Write + Send> ContainerWriter for ParquetContainerWriter<W> {
    fn write_row_group(&mut self, batch: &RecordBatch) -> Result<(), WriterError> {
        if batch.num_rows() == 0 {
            return Ok(());
        }
        if batch.num_columns() != self.schema.fields().len() {
            return Err(WriterError::InvalidData(format!(
                "row group has {} columns, schema declares {}",
                batch.num_columns(),
                self.schema.fields().len()
            )));
        }

        self.writer.write(batch)?;
        // Close the row group now so one batch maps to exactly one row group
        self.writer.flush()?;

        self.row_groups_written += 1;
        self.rows_written += batch.num_rows() as u64;
        debug!(
            "Row group {} written ({} rows)",
            self.row_groups_written,
            batch.num_rows()
        );
        Ok(())
    }

    fn close(self) -> Result<WriterStats, WriterError> {
        let file_metadata = self.writer.close()?;

        Ok(WriterStats {
            row_groups_written: file_metadata.row_groups.len(),
            rows_written: u64::try_from(file_metadata.num_rows).unwrap_or(0),
            file_size_bytes: file_metadata
                .row_groups
                .iter()
                .map(|rg| rg.total_byte_size as u64)
                .sum(),
        })
    }
}
