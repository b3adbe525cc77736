//! Bit-level access to 6-bit armored AIS payloads.

use super::error::DecodeError;

/// Map an armored payload byte to its 6-bit value.
///
/// Valid bytes are `'0'..='W'` (0-39) and `` '`'..='w' `` (40-63).
#[inline]
pub fn armor_value(byte: u8) -> Option<u8> {
    match byte {
        48..=87 => Some(byte - 48),
        96..=119 => Some(byte - 56),
        _ => None,
    }
}

/// Map a 6-bit value back to its armored payload byte.
#[inline]
pub fn armor_byte(value: u8) -> u8 {
    let value = value & 0x3f;
    if value < 40 {
        value + 48
    } else {
        value + 56
    }
}

/// Render a 6-bit AIS character as ASCII.
///
/// Values 0-31 map to `'@'..='_'`, values 32-63 to `' '..='?'`.
#[inline]
pub fn sixbit_to_ascii(value: u8) -> u8 {
    let value = value & 0x3f;
    if value < 32 {
        value + 64
    } else {
        value
    }
}

/// Encode an ASCII character as a 6-bit AIS character.
///
/// Lowercase letters are upper-cased; characters outside the AIS alphabet
/// become `'?'`.
#[inline]
pub fn ascii_to_sixbit(byte: u8) -> u8 {
    match byte.to_ascii_uppercase() {
        c @ 64..=95 => c - 64,
        c @ 32..=63 => c,
        _ => b'?',
    }
}

/// A validated, armored AIS payload addressed by bit offset.
#[derive(Debug, Clone, Copy)]
pub struct SixBitPayload<'a> {
    ascii: &'a [u8],
    bit_len: usize,
}

impl<'a> SixBitPayload<'a> {
    /// Validate the armoring and compute the usable bit length.
    pub fn new(ascii: &'a [u8], padding: u32) -> Result<Self, DecodeError> {
        if ascii.is_empty() {
            return Err(DecodeError::EmptyPayload);
        }
        if padding > 5 {
            return Err(DecodeError::InvalidPadding(padding));
        }
        if let Some(position) = ascii.iter().position(|&b| armor_value(b).is_none()) {
            return Err(DecodeError::InvalidCharacter {
                position,
                byte: ascii[position],
            });
        }

        Ok(Self {
            ascii,
            bit_len: ascii.len() * 6 - padding as usize,
        })
    }

    /// Number of data bits (excluding fill bits).
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// True when the payload holds at least `bits` data bits.
    pub fn has_bits(&self, bits: usize) -> bool {
        self.bit_len >= bits
    }

    /// The message type held in the first six bits.
    pub fn message_type(&self) -> Result<u8, DecodeError> {
        self.unsigned(0, 6).map(|v| v as u8)
    }

    #[inline]
    fn bit(&self, offset: usize) -> u32 {
        // Armoring was validated on construction
        let value = armor_value(self.ascii[offset / 6]).unwrap_or(0);
        u32::from((value >> (5 - offset % 6)) & 1)
    }

    /// Read an unsigned big-endian field of up to 32 bits.
    pub fn unsigned(&self, offset: usize, width: usize) -> Result<u32, DecodeError> {
        debug_assert!(width > 0 && width <= 32);
        let end = offset + width;
        if end > self.bit_len {
            return Err(DecodeError::PayloadTooShort {
                needed: end,
                available: self.bit_len,
            });
        }

        Ok((offset..end).fold(0u32, |acc, bit| (acc << 1) | self.bit(bit)))
    }

    /// Read a two's complement signed field of up to 32 bits.
    pub fn signed(&self, offset: usize, width: usize) -> Result<i32, DecodeError> {
        let raw = self.unsigned(offset, width)?;
        if width < 32 && raw & (1 << (width - 1)) != 0 {
            Ok((i64::from(raw) - (1i64 << width)) as i32)
        } else {
            Ok(raw as i32)
        }
    }

    /// Read a single-bit flag.
    pub fn flag(&self, offset: usize) -> Result<bool, DecodeError> {
        self.unsigned(offset, 1).map(|v| v == 1)
    }
}

/// Builds armored payloads bit by bit.
///
/// Used by the demo generator and by tests to produce payloads for every
/// supported message kind.
///
/// # Example
///
/// ```
/// use aisparq::ais::PayloadBuilder;
///
/// let (payload, padding) = PayloadBuilder::new()
///     .unsigned(1, 6)
///     .unsigned(0, 2)
///     .unsigned(235_009_802, 30)
///     .build();
/// assert_eq!(payload.len(), 7);
/// assert_eq!(padding, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    bits: Vec<bool>,
}

impl PayloadBuilder {
    /// Start an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, most significant first.
    ///
    /// Widths above 32 are zero-extended, which is handy for skipping fields.
    pub fn unsigned(mut self, value: u32, width: usize) -> Self {
        for shift in (0..width).rev() {
            self.bits.push(shift < 32 && (value >> shift) & 1 == 1);
        }
        self
    }

    /// Append a two's complement signed value.
    pub fn signed(self, value: i32, width: usize) -> Self {
        let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
        self.unsigned((value as u32) & mask, width)
    }

    /// Append a single-bit flag.
    pub fn flag(self, value: bool) -> Self {
        self.unsigned(u32::from(value), 1)
    }

    /// Append `text` as exactly `characters` 6-bit characters, padding with `'@'`.
    pub fn text(mut self, text: &str, characters: usize) -> Self {
        let mut bytes = text.bytes();
        for _ in 0..characters {
            let value = bytes.next().map(ascii_to_sixbit).unwrap_or(0);
            self = self.unsigned(u32::from(value), 6);
        }
        self
    }

    /// Number of bits appended so far.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Armor the bits, returning the payload and its fill-bit count.
    pub fn build(&self) -> (String, u32) {
        let padding = (6 - self.bits.len() % 6) % 6;
        let mut payload = String::with_capacity(self.bits.len() / 6 + 1);

        for chunk in self.bits.chunks(6) {
            let mut value = 0u8;
            for i in 0..6 {
                value <<= 1;
                if chunk.get(i).copied().unwrap_or(false) {
                    value |= 1;
                }
            }
            payload.push(armor_byte(value) as char);
        }

        (payload, padding as u32)
    }
}
