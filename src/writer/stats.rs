use std::fmt;

use serde::Serialize;

/// Statistics from a closed container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriterStats {
    /// Number of Parquet row groups written
    pub row_groups_written: usize,
    /// Total number of rows written
    pub rows_written: u64,
    /// Total uncompressed size of all row groups in bytes
    pub file_size_bytes: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} rows in {} row groups",
            self.rows_written, self.row_groups_written
        )
    }
}
