/// Errors raised while parsing NMEA lines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NmeaError {
    /// The tag block has no closing backslash
    #[error("unterminated tag block")]
    UnterminatedTagBlock,

    /// A tag block field is not of the form `key:value`
    #[error("malformed tag block field '{0}'")]
    MalformedTagField(String),

    /// The sentence does not start with `!` or `$`
    #[error("not an NMEA sentence")]
    NotASentence,

    /// The sentence is not an AIS VDM/VDO sentence
    #[error("unsupported sentence type '{0}'")]
    UnsupportedSentence(String),

    /// The sentence has the wrong number of fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Expected field count
        expected: usize,
        /// Actual field count
        found: usize,
    },

    /// A numeric field failed to parse
    #[error("invalid {field}: '{value}'")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Raw value
        value: String,
    },

    /// The checksum is missing or does not match
    #[error("checksum mismatch: expected {expected:02X}, found {found}")]
    Checksum {
        /// Computed checksum
        expected: u8,
        /// Checksum text in the line
        found: String,
    },

    /// The message carries no `c:` timestamp in its tag block
    #[error("message has no tag block timestamp")]
    MissingTimestamp,
}
