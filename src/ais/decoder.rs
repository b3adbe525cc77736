use super::bits::SixBitPayload;
use super::error::DecodeError;
use super::messages::{
    AisRecord, ExtendedPositionReportClassB, PositionReportClassA, PositionReportClassB,
    StaticAndVoyage,
};

/// Turns an armored payload into a typed record.
///
/// The export engine only depends on this trait, so alternative decoders (or
/// synthetic ones in tests) can be plugged in.
pub trait PayloadDecoder {
    /// Decode one complete (reassembled) payload.
    ///
    /// Returns [`DecodeError::UnsupportedMessageType`] for message kinds the
    /// decoder does not handle.
    fn decode<'a>(&self, payload: &'a [u8], padding: u32) -> Result<AisRecord<'a>, DecodeError>;
}

/// Message types decoded by [`AisDecoder`].
pub const SUPPORTED_MESSAGE_TYPES: [u8; 6] = [1, 2, 3, 5, 18, 19];

/// Read the message type without decoding the rest of the payload.
pub fn peek_message_type(payload: &[u8], padding: u32) -> Result<u8, DecodeError> {
    SixBitPayload::new(payload, padding)?.message_type()
}

/// Decoder for message types 1, 2, 3, 5, 18 and 19.
#[derive(Debug, Default, Clone, Copy)]
pub struct AisDecoder;

impl AisDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for AisDecoder {
    fn decode<'a>(&self, payload: &'a [u8], padding: u32) -> Result<AisRecord<'a>, DecodeError> {
        let payload = SixBitPayload::new(payload, padding)?;
        match payload.message_type()? {
            1..=3 => PositionReportClassA::parse(&payload).map(AisRecord::PositionReportClassA),
            5 => StaticAndVoyage::parse(&payload).map(AisRecord::StaticAndVoyage),
            18 => PositionReportClassB::parse(&payload).map(AisRecord::PositionReportClassB),
            19 => ExtendedPositionReportClassB::parse(&payload)
                .map(AisRecord::ExtendedPositionReportClassB),
            other => Err(DecodeError::UnsupportedMessageType(other)),
        }
    }
}
