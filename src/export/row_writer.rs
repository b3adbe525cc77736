use arrow::record_batch::RecordBatch;

use crate::ais::AisRecord;
use crate::nmea::TagBlock;
use crate::schema::Column;

use super::buffers::ColumnBufferSet;
use super::error::ExportError;
use super::mapping::{write_record, RowSlot};

/// Result of writing one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowWritten {
    /// The row filled the group; it must be flushed before the next write
    GroupFull,
    /// The group has room for more rows
    Pending,
}

/// Transposes decoded records into the column buffers.
///
/// Owns the row index within the current group and the total number of rows
/// ingested over the stream. The total is never reset.
#[derive(Debug)]
pub struct RowWriter {
    buffers: ColumnBufferSet,
    index_in_group: usize,
    total_rows: u64,
}

impl RowWriter {
    /// Wrap a freshly allocated buffer set.
    pub fn new(buffers: ColumnBufferSet) -> Self {
        Self {
            buffers,
            index_in_group: 0,
            total_rows: 0,
        }
    }

    /// Write one record at the current row index.
    ///
    /// The source id comes from the tag block's leading digits (0 when it has
    /// none). The row index only advances once every column is written.
    pub fn write_row(
        &mut self,
        header: &TagBlock<'_>,
        record: &AisRecord<'_>,
    ) -> Result<RowWritten, ExportError> {
        let capacity = self.buffers.capacity();
        if self.index_in_group >= capacity {
            return Err(ExportError::GroupFull { capacity });
        }
        let timestamp = header.unix_timestamp.ok_or(ExportError::MissingTimestamp)?;

        let row = self.index_in_group;
        self.buffers.clear_row(row)?;

        let mut slot = RowSlot::new(&mut self.buffers, row);
        slot.int(Column::Source, header.source_id())?;
        slot.int(Column::MessageType, i32::from(record.message_type()))?;
        slot.timestamp(timestamp)?;
        write_record(&mut slot, record)?;

        self.index_in_group += 1;
        self.total_rows += 1;

        if self.index_in_group == capacity {
            Ok(RowWritten::GroupFull)
        } else {
            Ok(RowWritten::Pending)
        }
    }

    /// Rows written since the last flush.
    pub fn index_in_group(&self) -> usize {
        self.index_in_group
    }

    /// Rows written over the whole stream.
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Snapshot the current group: the full buffer when it is full, otherwise
    /// only the rows written so far.
    pub fn current_group(&mut self) -> Result<RecordBatch, ExportError> {
        self.buffers.truncate(self.index_in_group);
        self.buffers.to_record_batch()
    }

    /// Start a new group after a flush.
    pub fn reset_group(&mut self) {
        self.buffers.reset();
        self.index_in_group = 0;
    }
}
