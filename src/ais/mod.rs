//! # AIS Payload Decoding
//!
//! Decodes 6-bit armored AIS payloads (the fifth field of `!AIVDM` sentences)
//! into typed records for the message kinds the exporter stores:
//!
//! | Type | Record |
//! |------|--------|
//! | 1, 2, 3 | [`PositionReportClassA`] |
//! | 5 | [`StaticAndVoyage`] |
//! | 18 | [`PositionReportClassB`] |
//! | 19 | [`ExtendedPositionReportClassB`] |
//!
//! Records borrow the payload: text fields are [`SixBitText`] views rendered
//! only when written, so decoding does not allocate.

mod bits;
mod decoder;
mod error;
mod messages;
mod text;

#[cfg(test)]
mod tests;

pub use bits::{armor_byte, armor_value, ascii_to_sixbit, sixbit_to_ascii, PayloadBuilder, SixBitPayload};
pub use decoder::{peek_message_type, AisDecoder, PayloadDecoder, SUPPORTED_MESSAGE_TYPES};
pub use error::DecodeError;
pub use messages::{
    AisRecord, ExtendedPositionReportClassB, PositionReportClassA, PositionReportClassB,
    StaticAndVoyage,
};
pub use text::SixBitText;
