use super::bits::{sixbit_to_ascii, SixBitPayload};

/// A text field inside an armored payload, rendered on demand.
///
/// Holds only a view of the payload, so decoding a record never allocates
/// for its text fields.
#[derive(Debug, Clone, Copy)]
pub struct SixBitText<'a> {
    payload: SixBitPayload<'a>,
    bit_offset: usize,
    character_count: usize,
}

impl<'a> SixBitText<'a> {
    /// View `bit_length` bits at `bit_offset` as 6-bit characters.
    ///
    /// A payload that ends early yields only the whole characters present.
    pub fn new(payload: SixBitPayload<'a>, bit_offset: usize, bit_length: usize) -> Self {
        let available = payload.bit_len().saturating_sub(bit_offset);
        Self {
            payload,
            bit_offset,
            character_count: bit_length.min(available) / 6,
        }
    }

    /// Number of 6-bit characters in the field.
    pub fn character_count(&self) -> usize {
        self.character_count
    }

    /// Write the characters as ASCII into `dest`, returning how many were written.
    ///
    /// Writes at most `dest.len()` characters and leaves the rest of `dest`
    /// untouched.
    pub fn write_ascii(&self, dest: &mut [u8]) -> usize {
        let count = self.character_count.min(dest.len());
        for (i, slot) in dest.iter_mut().take(count).enumerate() {
            let value = self
                .payload
                .unsigned(self.bit_offset + i * 6, 6)
                .unwrap_or(0);
            *slot = sixbit_to_ascii(value as u8);
        }
        count
    }

    /// The text with trailing `'@'` padding and spaces removed.
    pub fn to_trimmed_string(&self) -> String {
        let mut buf = vec![0u8; self.character_count];
        self.write_ascii(&mut buf);
        let text = String::from_utf8_lossy(&buf);
        text.trim_end_matches(['@', ' ']).to_string()
    }
}
