use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::ais::{AisDecoder, DecodeError, PayloadDecoder, SUPPORTED_MESSAGE_TYPES};
use crate::ingest::{format_rate, AisMessageProcessor, ProgressReport};
use crate::nmea::{NmeaStreamParser, StreamConfig, StreamSummary, TagBlock};
use crate::schema::AisSchema;
use crate::writer::{ContainerWriter, ParquetContainerWriter};

use super::buffers::ColumnBufferSet;
use super::config::ExportConfig;
use super::error::ExportError;
use super::row_writer::{RowWriter, RowWritten};
use super::stats::ExportStats;

/// Lifecycle of an export stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Taking rows
    Accumulating,
    /// Handing a row group to the container writer
    Flushing,
    /// Final group flushed and container closed
    Closed,
}

/// Why a message produced no row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A message kind the exporter does not store
    Unsupported(u8),
    /// The payload failed to decode; the row was dropped whole
    Malformed(DecodeError),
}

/// Outcome of [`BatchExportEngine::write_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// One row was appended
    Written,
    /// No row was appended
    Skipped(SkipReason),
}

/// Accumulates decoded messages into fixed-capacity row groups and hands
/// each full group to a [`ContainerWriter`].
///
/// Row groups are flushed in fill order. [`finish`](Self::finish) flushes the
/// trailing partial group, if any, exactly once and closes the container.
/// Rows pending in a stream that is dropped without `finish` are lost.
pub struct BatchExportEngine<C: ContainerWriter, D: PayloadDecoder = AisDecoder> {
    row_writer: RowWriter,
    writer: Option<C>,
    decoder: D,
    state: EngineState,
    stats: ExportStats,
}

impl<C: ContainerWriter> BatchExportEngine<C, AisDecoder> {
    /// Create an engine using the built-in AIS decoder.
    pub fn new(schema: Arc<AisSchema>, writer: C, max_rows_per_group: usize) -> Result<Self, ExportError> {
        Self::with_decoder(schema, writer, max_rows_per_group, AisDecoder::new())
    }
}

impl BatchExportEngine<ParquetContainerWriter<File>, AisDecoder> {
    /// Create an engine writing a Parquet file at `path`.
    pub fn to_parquet<P: AsRef<Path>>(path: P, config: &ExportConfig) -> Result<Self, ExportError> {
        let schema = Arc::new(config.build_schema()?);
        let writer = ParquetContainerWriter::create(
            path,
            schema.arrow_schema(),
            &config.writer,
            config.max_rows_per_group,
        )?;
        Self::new(schema, writer, config.max_rows_per_group)
    }
}

impl<C: ContainerWriter, D: PayloadDecoder> BatchExportEngine<C, D> {
    /// Create an engine with a custom payload decoder.
    pub fn with_decoder(
        schema: Arc<AisSchema>,
        writer: C,
        max_rows_per_group: usize,
        decoder: D,
    ) -> Result<Self, ExportError> {
        let buffers = ColumnBufferSet::new(schema, max_rows_per_group)?;
        Ok(Self {
            row_writer: RowWriter::new(buffers),
            writer: Some(writer),
            decoder,
            state: EngineState::Accumulating,
            stats: ExportStats::default(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> ExportStats {
        ExportStats {
            rows_ingested: self.row_writer.total_rows(),
            ..self.stats
        }
    }

    /// Rows buffered in the current group.
    pub fn pending_rows(&self) -> usize {
        self.row_writer.index_in_group()
    }

    /// Decode one payload and append it as a row.
    ///
    /// Unsupported kinds and payloads that fail to decode are skipped and
    /// counted; neither is an error. A full group is flushed before returning.
    pub fn write_message(
        &mut self,
        header: &TagBlock<'_>,
        payload: &[u8],
        padding: u32,
    ) -> Result<RowOutcome, ExportError> {
        if self.state == EngineState::Closed {
            return Err(ExportError::StreamClosed);
        }

        let record = match self.decoder.decode(payload, padding) {
            Ok(record) => record,
            Err(DecodeError::UnsupportedMessageType(kind)) => {
                self.stats.skipped_unsupported += 1;
                return Ok(RowOutcome::Skipped(SkipReason::Unsupported(kind)));
            }
            Err(e) => {
                self.stats.skipped_malformed += 1;
                debug!("Dropping malformed message: {}", e);
                return Ok(RowOutcome::Skipped(SkipReason::Malformed(e)));
            }
        };

        if self.row_writer.write_row(header, &record)? == RowWritten::GroupFull {
            self.flush_group()?;
        }
        Ok(RowOutcome::Written)
    }

    fn flush_group(&mut self) -> Result<(), ExportError> {
        let writer = self.writer.as_mut().ok_or(ExportError::StreamClosed)?;
        self.state = EngineState::Flushing;

        let batch = self.row_writer.current_group()?;
        writer.write_row_group(&batch)?;
        self.stats.row_groups_written += 1;
        debug!(
            "Flushed row group {} ({} rows, {} total)",
            self.stats.row_groups_written,
            batch.num_rows(),
            self.row_writer.total_rows()
        );

        self.row_writer.reset_group();
        self.state = EngineState::Accumulating;
        Ok(())
    }

    /// Flush the trailing partial group and close the container.
    ///
    /// A group that filled exactly on the last row was already flushed, so
    /// no empty group is written. Calling this twice is an error.
    pub fn finish(&mut self) -> Result<ExportStats, ExportError> {
        if self.state == EngineState::Closed {
            return Err(ExportError::StreamClosed);
        }

        if self.row_writer.index_in_group() > 0 {
            self.flush_group()?;
        }

        let writer = self.writer.take().ok_or(ExportError::StreamClosed)?;
        let writer_stats = writer.close()?;
        self.stats.writer = Some(writer_stats);
        self.state = EngineState::Closed;

        let stats = self.stats();
        info!("{}", stats);
        Ok(stats)
    }
}

impl<C: ContainerWriter, D: PayloadDecoder> AisMessageProcessor for BatchExportEngine<C, D> {
    type Error = ExportError;

    fn on_next(&mut self, header: &TagBlock<'_>, payload: &[u8], padding: u32) -> Result<(), ExportError> {
        self.write_message(header, payload, padding).map(|_| ())
    }

    fn on_completed(&mut self) -> Result<(), ExportError> {
        self.finish().map(|_| ())
    }

    fn progress(&self, report: &ProgressReport) {
        let stats = self.stats();
        let label = if report.done { "Done" } else { "Progress" };
        info!(
            "{}: {} lines, {} messages in {} ms ({} lines/s, {} msgs/s; recent {} lines/s, {} msgs/s); {} rows, {} unsupported, {} malformed",
            label,
            report.total_lines,
            report.total_messages,
            report.total_elapsed_ms,
            format_rate(report.lines_per_second()),
            format_rate(report.messages_per_second()),
            format_rate(report.recent_lines_per_second()),
            format_rate(report.recent_messages_per_second()),
            stats.rows_ingested,
            stats.skipped_unsupported,
            stats.skipped_malformed
        );
        if report.done && stats.skipped_unsupported > 0 {
            info!(
                "{} messages of other types were skipped (exported types: {:?})",
                stats.skipped_unsupported, SUPPORTED_MESSAGE_TYPES
            );
        }
        if report.done && stats.skipped_malformed > 0 {
            warn!("{} malformed messages were dropped", stats.skipped_malformed);
        }
    }
}

/// Convert an NMEA file into a Parquet file.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &ExportConfig,
    stream: StreamConfig,
) -> Result<(StreamSummary, ExportStats), ExportError> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Converting {} -> {}", input.display(), output.display());

    let mut engine = BatchExportEngine::to_parquet(output, config)?;
    let summary = NmeaStreamParser::with_config(stream).parse_file(input, &mut engine)?;
    Ok((summary, engine.stats()))
}
