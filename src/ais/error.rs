/// Errors raised while decoding an armored AIS payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload has no characters
    #[error("empty payload")]
    EmptyPayload,

    /// A payload byte is outside the 6-bit armoring alphabet
    #[error("invalid payload character {byte:#04x} at position {position}")]
    InvalidCharacter {
        /// Zero-based character position
        position: usize,
        /// Offending byte
        byte: u8,
    },

    /// Fill bits must be in 0..=5
    #[error("invalid padding: {0} fill bits")]
    InvalidPadding(u32),

    /// A field extends beyond the end of the payload
    #[error("payload too short: field needs {needed} bits, payload has {available}")]
    PayloadTooShort {
        /// Bits required to read the field
        needed: usize,
        /// Bits present in the payload
        available: usize,
    },

    /// The message type is not one this crate decodes
    #[error("unsupported message type {0}")]
    UnsupportedMessageType(u8),
}
