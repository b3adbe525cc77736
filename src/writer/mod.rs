//! # Container Writer Module
//!
//! Encodes flushed row groups into Apache Parquet.
//!
//! ## Design Principles
//!
//! 1. **One batch, one row group**: the exporter decides row group boundaries.
//!    [`ParquetContainerWriter`] closes a Parquet row group after every batch it
//!    is handed, so the file layout mirrors the exporter's flush sequence.
//!
//! 2. **Self-describing files**: the format version and converter info are
//!    embedded in the Parquet footer's key_value_metadata.
//!
//! 3. **Configurable Compression**: Supports ZSTD (default), Snappy, and uncompressed.
//!    Low-cardinality columns (message type, navigation status, ship type...)
//!    are dictionary encoded.

mod config;
mod container;
mod error;
mod parquet_writer;
mod stats;

#[cfg(test)]
mod tests;

pub use config::{CompressionType, WriterConfig};
pub use container::ContainerWriter;
pub use error::WriterError;
pub use parquet_writer::{footer_metadata, ParquetContainerWriter};
pub use stats::WriterStats;
