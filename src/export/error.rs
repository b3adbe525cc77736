use crate::schema::SchemaError;
use crate::writer::WriterError;

/// Errors raised by the batch export engine
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error reading input or creating output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the Arrow library while assembling a row group
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Invalid schema configuration
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The container writer failed
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    /// A message arrived without a tag block timestamp
    #[error("message has no tag block timestamp")]
    MissingTimestamp,

    /// A message or completion arrived after the stream was closed
    #[error("export stream is already closed")]
    StreamClosed,

    /// A row was written into a full row group that was never flushed
    #[error("row group is full ({capacity} rows) and has not been flushed")]
    GroupFull {
        /// Row group capacity
        capacity: usize,
    },

    /// A row index beyond the buffer capacity
    #[error("row {row} is outside the buffer capacity of {capacity}")]
    RowOutOfRange {
        /// Requested row
        row: usize,
        /// Buffer capacity
        capacity: usize,
    },

    /// A value of the wrong storage class for its column
    #[error("column '{column}' stores {expected} values, got {found}")]
    ColumnTypeMismatch {
        /// Column name
        column: String,
        /// Column storage class
        expected: String,
        /// Value storage class
        found: String,
    },

    /// Invalid engine configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
