//! # NMEA Stream Driver
//!
//! Reads line-oriented AIS feeds in the common tagged form
//!
//! ```text
//! \s:42,c:1614556800*36\!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*49
//! ```
//!
//! and pushes each complete message into an
//! [`AisMessageProcessor`](crate::ingest::AisMessageProcessor).
//!
//! - [`TagBlock`] parses the `\...\` prefix (source, timestamp, grouping)
//! - [`NmeaSentence`] parses `!AIVDM` / `!AIVDO` with checksum validation
//! - [`NmeaStreamParser`] reassembles fragments and reports progress
//! - [`encode_sentences`] produces checksummed lines, used by the demo
//!   generator and tests

mod checksum;
mod error;
mod sentence;
mod stream;
mod tag_block;

#[cfg(test)]
mod tests;

pub use checksum::nmea_checksum;
pub use error::NmeaError;
pub use sentence::{encode_sentences, NmeaLine, NmeaSentence, MAX_FRAGMENT_PAYLOAD};
pub use stream::{NmeaStreamParser, StreamConfig, StreamSummary, DEFAULT_PROGRESS_INTERVAL_LINES};
pub use tag_block::{SentenceGroup, TagBlock};

