//! Thin-waist ingestion contract between the NMEA stream driver and a message
//! processor such as the batch export engine.
//!
//! Contract:
//! - `on_next` is called once per complete AIS message, in input arrival order.
//! - `on_completed` is called exactly once, after the last `on_next`, when the
//!   input is exhausted. It is skipped if the stream aborts with an error, in
//!   which case a processor's pending data is lost.
//! - `progress` is purely observational and may be called at any time,
//!   including once with `done = true` at the very end.

use serde::Serialize;

use crate::nmea::TagBlock;

/// Receives decoded-line events from an NMEA stream driver.
pub trait AisMessageProcessor {
    /// Error type returned by the processor.
    type Error;

    /// Handle one complete (reassembled) AIS payload.
    ///
    /// `header` is the tag block of the message's first sentence.
    fn on_next(&mut self, header: &TagBlock<'_>, payload: &[u8], padding: u32)
        -> Result<(), Self::Error>;

    /// The input is exhausted; flush and release resources.
    fn on_completed(&mut self) -> Result<(), Self::Error>;

    /// Periodic progress notification from the driver.
    fn progress(&self, report: &ProgressReport);
}

/// Counters reported by the stream driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    /// True for the final report
    pub done: bool,
    /// NMEA lines read so far
    pub total_lines: u64,
    /// AIS messages delivered so far
    pub total_messages: u64,
    /// Milliseconds since the stream started
    pub total_elapsed_ms: u64,
    /// Lines read since the previous report
    pub lines_since_last: u64,
    /// Messages delivered since the previous report
    pub messages_since_last: u64,
    /// Milliseconds since the previous report
    pub elapsed_since_last_ms: u64,
}

/// Events per second, or `None` when no time has elapsed.
pub fn rate_per_second(count: u64, elapsed_ms: u64) -> Option<u64> {
    if elapsed_ms == 0 {
        None
    } else {
        Some(count.saturating_mul(1000) / elapsed_ms)
    }
}

impl ProgressReport {
    /// Overall line rate.
    pub fn lines_per_second(&self) -> Option<u64> {
        rate_per_second(self.total_lines, self.total_elapsed_ms)
    }

    /// Overall message rate.
    pub fn messages_per_second(&self) -> Option<u64> {
        rate_per_second(self.total_messages, self.total_elapsed_ms)
    }

    /// Line rate over the last interval.
    pub fn recent_lines_per_second(&self) -> Option<u64> {
        rate_per_second(self.lines_since_last, self.elapsed_since_last_ms)
    }

    /// Message rate over the last interval.
    pub fn recent_messages_per_second(&self) -> Option<u64> {
        rate_per_second(self.messages_since_last, self.elapsed_since_last_ms)
    }
}

/// Formats an optional rate for log output.
pub(crate) fn format_rate(rate: Option<u64>) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| r.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_guards_zero_interval() {
        assert_eq!(rate_per_second(500, 0), None);
        assert_eq!(rate_per_second(500, 250), Some(2000));
        assert_eq!(rate_per_second(0, 10), Some(0));
        assert_eq!(format_rate(None), "n/a");
    }

    #[test]
    fn test_report_rates() {
        let report = ProgressReport {
            done: false,
            total_lines: 10_000,
            total_messages: 8_000,
            total_elapsed_ms: 2_000,
            lines_since_last: 1_000,
            messages_since_last: 900,
            elapsed_since_last_ms: 0,
        };
        assert_eq!(report.lines_per_second(), Some(5_000));
        assert_eq!(report.messages_per_second(), Some(4_000));
        assert_eq!(report.recent_lines_per_second(), None);
        assert_eq!(report.recent_messages_per_second(), None);
    }
}
