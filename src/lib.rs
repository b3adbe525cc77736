//! # aisparq - Columnar Export of AIS Streams
//!
//! `aisparq` turns tagged NMEA feeds of AIS (Automatic Identification System)
//! messages into row-grouped Apache Parquet files for analytical storage.
//!
//! ## Key Features
//!
//! - **One wide table**: position reports (types 1, 2, 3, 18), static and
//!   voyage data (type 5) and extended class B reports (type 19) share a single
//!   49-column nullable schema. Columns a message kind does not carry are null.
//!
//! - **Fixed-capacity row groups**: rows are transposed into pre-allocated
//!   column buffers and flushed every 100,000 rows; the trailing partial group
//!   is flushed once at end of stream.
//!
//! - **Fixed-width text**: ship names, call signs and destinations are stored as
//!   `FixedSizeBinary` columns sized from their AIS bit lengths, zero-filled
//!   when absent.
//!
//! - **Skip, don't abort**: unsupported kinds and undecodable payloads are
//!   counted and dropped whole; the stream continues.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aisparq::export::{BatchExportEngine, ExportConfig};
//! use aisparq::nmea::NmeaStreamParser;
//!
//! let config = ExportConfig::default();
//! let mut engine = BatchExportEngine::to_parquet("20210301T00.parquet", &config)?;
//!
//! let summary = NmeaStreamParser::new().parse_file("20210301T00.nm4", &mut engine)?;
//! println!("{} lines, {}", summary.lines, engine.stats());
//! # Ok::<(), aisparq::export::ExportError>(())
//! ```
//!
//! ## Reading the Output
//!
//! Exported files are plain Parquet and can be read with any Parquet tool:
//!
//! ```sql
//! -- DuckDB
//! SELECT mmsi, latitude / 600000.0 AS lat, longitude / 600000.0 AS lon
//! FROM read_parquet('parquet/20210301/*.parquet')
//! WHERE messageType IN (1, 2, 3);
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: column identifiers, text widths and the Arrow schema
//! - [`export`]: column buffers, row writer and the batch export engine
//! - [`writer`]: the container writer contract and its Parquet implementation
//! - [`ingest`]: the push contract between a stream driver and a processor
//! - [`nmea`]: tag block and sentence parsing, fragment reassembly
//! - [`ais`]: 6-bit payload decoding for the supported message kinds
//!
//! ### File Footer Metadata
//!
//! - `ais:format_version`: Format version string
//! - `ais:converter_info`: Name and version of the converter

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod ais;
pub mod export;
pub mod ingest;
pub mod nmea;
pub mod schema;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::ais::{AisDecoder, AisRecord, DecodeError, PayloadDecoder};
    pub use crate::export::{
        convert_file, BatchExportEngine, ColumnBufferSet, ExportConfig, ExportError, ExportStats,
        RowOutcome, SkipReason,
    };
    pub use crate::ingest::{AisMessageProcessor, ProgressReport};
    pub use crate::nmea::{NmeaStreamParser, StreamConfig, StreamSummary, TagBlock};
    pub use crate::schema::{
        create_ais_schema, validate_schema, AisSchema, Column, TextWidths, AIS_FORMAT_VERSION,
    };
    pub use crate::writer::{
        CompressionType, ContainerWriter, ParquetContainerWriter, WriterConfig, WriterStats,
    };
}
