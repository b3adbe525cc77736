use std::fmt;

use serde::Serialize;

use crate::writer::WriterStats;

/// Counters for one export stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    /// Rows written into the column buffers
    pub rows_ingested: u64,
    /// Row groups handed to the container writer
    pub row_groups_written: usize,
    /// Messages of a kind the exporter does not store
    pub skipped_unsupported: u64,
    /// Messages dropped because they failed to decode
    pub skipped_malformed: u64,
    /// Container statistics, once the stream is closed
    pub writer: Option<WriterStats>,
}

impl ExportStats {
    /// Messages seen, whether written or skipped
    pub fn messages_seen(&self) -> u64 {
        self.rows_ingested + self.skipped_unsupported + self.skipped_malformed
    }
}

impl fmt::Display for ExportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} rows in {} row groups ({} unsupported, {} malformed skipped)",
            self.rows_ingested,
            self.row_groups_written,
            self.skipped_unsupported,
            self.skipped_malformed
        )
    }
}
