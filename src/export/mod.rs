//! # Batch Export Engine
//!
//! Turns a stream of decoded AIS messages into row-grouped columnar batches.
//!
//! ```text
//! payload ──decode──▶ AisRecord ──RowWriter──▶ ColumnBufferSet
//!                                                   │ full / end of stream
//!                                                   ▼
//!                                          ContainerWriter (one row group)
//! ```
//!
//! - [`ColumnBufferSet`] holds one pre-allocated array per column
//! - [`RowWriter`] maps each record kind onto its columns and owns the row
//!   counters
//! - [`BatchExportEngine`] decides when to flush and implements
//!   [`AisMessageProcessor`](crate::ingest::AisMessageProcessor)
//!
//! ## Example
//!
//! ```no_run
//! use aisparq::export::{convert_file, ExportConfig};
//! use aisparq::nmea::StreamConfig;
//!
//! let (summary, stats) = convert_file(
//!     "20210301T00.nm4",
//!     "20210301T00.parquet",
//!     &ExportConfig::default(),
//!     StreamConfig::default(),
//! )?;
//! println!("{} lines, {}", summary.lines, stats);
//! # Ok::<(), aisparq::export::ExportError>(())
//! ```

mod buffers;
mod config;
mod engine;
mod error;
mod mapping;
mod row_writer;
mod stats;
mod text;


pub use buffers::{ColumnBufferSet, Scalar};
pub use config::ExportConfig;
pub use engine::{convert_file, BatchExportEngine, EngineState, RowOutcome, SkipReason};
pub use error::ExportError;
pub use row_writer::{RowWriter, RowWritten};
pub use stats::ExportStats;
pub use text::{normalize_text, TextSource, TEXT_PADDING};
