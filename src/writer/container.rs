use arrow::record_batch::RecordBatch;

use super::error::WriterError;
use super::stats::WriterStats;

/// Destination for flushed row groups.
///
/// The schema is fixed when the writer is created. Each call to
/// [`write_row_group`](ContainerWriter::write_row_group) receives every column
/// of one row group and must finalize it durably before returning; the batch is
/// borrowed only for the duration of the call. [`close`](ContainerWriter::close)
/// finalizes the whole container after the last row group.
pub trait ContainerWriter {
    /// Encode one complete row group.
    fn write_row_group(&mut self, batch: &RecordBatch) -> Result<(), WriterError>;

    /// Finalize the container and report what was written.
    fn close(self) -> Result<WriterStats, WriterError>
    where
        Self: Sized;
}
