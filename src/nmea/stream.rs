use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, warn};
use serde::Serialize;

use super::error::NmeaError;
use super::sentence::NmeaLine;
use super::tag_block::TagBlock;
use crate::ingest::{AisMessageProcessor, ProgressReport};

/// Default number of lines between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL_LINES: u64 = 100_000;

/// Settings for [`NmeaStreamParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Lines between progress reports; 0 disables intermediate reports
    pub progress_interval_lines: u64,
    /// Reject sentences and tag blocks whose checksum does not match
    pub validate_checksums: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            progress_interval_lines: DEFAULT_PROGRESS_INTERVAL_LINES,
            validate_checksums: true,
        }
    }
}

/// Line and message counts for one parsed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Lines read, including blank and rejected ones
    pub lines: u64,
    /// Complete messages delivered to the processor
    pub messages: u64,
    /// Lines that could not be parsed or carried no timestamp
    pub rejected_lines: u64,
    /// Multi-fragment messages abandoned before their last fragment
    pub incomplete_messages: u64,
    /// Wall-clock time spent in the stream
    pub elapsed_ms: u64,
}

/// A multi-fragment message waiting for its remaining sentences.
#[derive(Debug)]
struct PendingMessage {
    /// Tag block content of the first fragment
    tag_content: Option<String>,
    payload: String,
    fragment_count: u8,
    next_fragment: u8,
}

/// Push-based NMEA driver.
///
/// Reads lines, reassembles fragments, and feeds each complete payload to an
/// [`AisMessageProcessor`] in arrival order. Unparseable lines and messages
/// without a tag block timestamp are counted as rejected and skipped. An I/O
/// or processor error aborts the stream without calling `on_completed`.
#[derive(Debug, Clone, Default)]
pub struct NmeaStreamParser {
    config: StreamConfig,
}

impl NmeaStreamParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: StreamConfig) -> Self {
        Self { config }
    }

    /// Parser configuration.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Open `path` and parse it to completion.
    pub fn parse_file<P, A>(&self, path: P, processor: &mut A) -> Result<StreamSummary, A::Error>
    where
        P: AsRef<Path>,
        A: AisMessageProcessor,
        A::Error: From<io::Error>,
    {
        let file = File::open(path.as_ref())?;
        self.parse_reader(BufReader::new(file), processor)
    }

    /// Parse `reader` to completion.
    pub fn parse_reader<R, A>(&self, mut reader: R, processor: &mut A) -> Result<StreamSummary, A::Error>
    where
        R: BufRead,
        A: AisMessageProcessor,
        A::Error: From<io::Error>,
    {
        let start = Instant::now();
        let mut summary = StreamSummary::default();
        let mut pending: HashMap<Option<u8>, PendingMessage> = HashMap::new();

        let mut last_report = start;
        let mut lines_at_last = 0u64;
        let mut messages_at_last = 0u64;

        let mut buf = Vec::with_capacity(256);
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            match std::str::from_utf8(&buf) {
                Ok(text) => {
                    let line = text.trim_end_matches(['\r', '\n']);
                    if !line.trim().is_empty() {
                        match self.handle_line(line, &mut pending, &mut summary, processor) {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => {
                                summary.rejected_lines += 1;
                                debug!("Line {}: rejected ({})", summary.lines, e);
                            }
                            Err(e) => return Err(e),
                        }
                    }
                }
                Err(_) => {
                    summary.rejected_lines += 1;
                    debug!("Line {}: rejected (not UTF-8)", summary.lines);
                }
            }

            let interval = self.config.progress_interval_lines;
            if interval > 0 && summary.lines % interval == 0 {
                let now = Instant::now();
                processor.progress(&ProgressReport {
                    done: false,
                    total_lines: summary.lines,
                    total_messages: summary.messages,
                    total_elapsed_ms: millis(now - start),
                    lines_since_last: summary.lines - lines_at_last,
                    messages_since_last: summary.messages - messages_at_last,
                    elapsed_since_last_ms: millis(now - last_report),
                });
                last_report = now;
                lines_at_last = summary.lines;
                messages_at_last = summary.messages;
            }
        }

        if !pending.is_empty() {
            summary.incomplete_messages += pending.len() as u64;
            warn!(
                "{} multi-fragment message(s) incomplete at end of input",
                pending.len()
            );
        }

        processor.on_completed()?;

        let now = Instant::now();
        summary.elapsed_ms = millis(now - start);
        processor.progress(&ProgressReport {
            done: true,
            total_lines: summary.lines,
            total_messages: summary.messages,
            total_elapsed_ms: summary.elapsed_ms,
            lines_since_last: summary.lines - lines_at_last,
            messages_since_last: summary.messages - messages_at_last,
            elapsed_since_last_ms: millis(now - last_report),
        });

        Ok(summary)
    }

    /// Handle one non-empty line.
    ///
    /// The outer result carries processor errors (fatal); the inner one
    /// carries parse errors (the line is rejected).
    fn handle_line<A>(
        &self,
        line: &str,
        pending: &mut HashMap<Option<u8>, PendingMessage>,
        summary: &mut StreamSummary,
        processor: &mut A,
    ) -> Result<Result<(), NmeaError>, A::Error>
    where
        A: AisMessageProcessor,
    {
        let parsed = match NmeaLine::parse(line, self.config.validate_checksums) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(Err(e)),
        };
        let sentence = parsed.sentence;

        if sentence.is_complete() {
            if parsed.tag_block.unix_timestamp.is_none() {
                return Ok(Err(NmeaError::MissingTimestamp));
            }
            summary.messages += 1;
            processor.on_next(&parsed.tag_block, sentence.payload.as_bytes(), sentence.padding)?;
            return Ok(Ok(()));
        }

        let key = sentence.sequential_id;
        if sentence.fragment_number == 1 {
            if pending.contains_key(&key) {
                summary.incomplete_messages += 1;
                debug!("Line {}: fragment sequence {:?} restarted", summary.lines, key);
            }
            pending.insert(
                key,
                PendingMessage {
                    tag_content: parsed.tag_block_content.map(str::to_string),
                    payload: sentence.payload.to_string(),
                    fragment_count: sentence.fragment_count,
                    next_fragment: 2,
                },
            );
            return Ok(Ok(()));
        }

        let in_sequence = pending.get(&key).is_some_and(|p| {
            p.next_fragment == sentence.fragment_number && p.fragment_count == sentence.fragment_count
        });
        if !in_sequence {
            if pending.remove(&key).is_some() {
                summary.incomplete_messages += 1;
            }
            return Ok(Err(NmeaError::InvalidField {
                field: "fragment number",
                value: format!("{}/{}", sentence.fragment_number, sentence.fragment_count),
            }));
        }

        if sentence.fragment_number < sentence.fragment_count {
            if let Some(message) = pending.get_mut(&key) {
                message.payload.push_str(sentence.payload);
                message.next_fragment += 1;
            }
            return Ok(Ok(()));
        }

        let Some(mut message) = pending.remove(&key) else {
            return Ok(Ok(()));
        };
        message.payload.push_str(sentence.payload);

        // The header comes from the first fragment; the fill bits from the last.
        let header = match message.tag_content.as_deref() {
            Some(content) => match TagBlock::parse(content, false) {
                Ok(tag) => tag,
                Err(e) => return Ok(Err(e)),
            },
            None => TagBlock::default(),
        };
        if header.unix_timestamp.is_none() {
            return Ok(Err(NmeaError::MissingTimestamp));
        }
        summary.messages += 1;
        processor.on_next(&header, message.payload.as_bytes(), sentence.padding)?;
        Ok(Ok(()))
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
