//! Fixed-width rendering of AIS text fields.

use crate::ais::SixBitText;

/// A text value that can be rendered into a fixed-width byte buffer.
pub trait TextSource {
    /// Number of characters in the value.
    fn character_count(&self) -> usize;

    /// Write up to `dest.len()` characters as ASCII, returning how many were written.
    fn write_ascii(&self, dest: &mut [u8]) -> usize;
}

impl TextSource for SixBitText<'_> {
    fn character_count(&self) -> usize {
        SixBitText::character_count(self)
    }

    fn write_ascii(&self, dest: &mut [u8]) -> usize {
        SixBitText::write_ascii(self, dest)
    }
}

impl TextSource for str {
    fn character_count(&self) -> usize {
        self.len()
    }

    fn write_ascii(&self, dest: &mut [u8]) -> usize {
        let count = self.len().min(dest.len());
        dest[..count].copy_from_slice(&self.as_bytes()[..count]);
        count
    }
}

/// AIS fill character for unused text positions (6-bit value 0).
pub const TEXT_PADDING: u8 = b'@';

/// Render `source` into `dest`, zero-filling whatever it does not cover.
///
/// Trailing `'@'` padding counts as absent, so a short value and a
/// truncated one are stored the same way. An empty source leaves `dest`
/// entirely zeroed, which is how an absent text value is stored. Works in
/// place without allocating.
pub fn normalize_text<T: TextSource + ?Sized>(source: &T, dest: &mut [u8]) {
    if source.character_count() == 0 {
        dest.fill(0);
        return;
    }
    let written = source.write_ascii(dest);
    let end = dest[..written]
        .iter()
        .rposition(|&b| b != TEXT_PADDING)
        .map_or(0, |last| last + 1);
    dest[end..].fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::{PayloadBuilder, SixBitPayload};
    use proptest::prelude::*;

    #[test]
    fn test_empty_text_zero_fills_full_width() {
        let mut dest = [0xAAu8; 20];
        normalize_text("", &mut dest);
        assert_eq!(dest, [0u8; 20]);
    }

    #[test]
    fn test_shorter_value_clears_stale_bytes() {
        let mut dest = [0u8; 7];
        normalize_text("LONGSGN", &mut dest);
        normalize_text("AB", &mut dest);
        assert_eq!(&dest, b"AB\0\0\0\0\0");
    }

    #[test]
    fn test_six_bit_text_renders_ascii() {
        let (payload, padding) = PayloadBuilder::new().unsigned(0, 6).text("MXRB3", 7).build();
        let payload = SixBitPayload::new(payload.as_bytes(), padding).unwrap();
        let text = SixBitText::new(payload, 6, 42);

        let mut dest = [0xFFu8; 7];
        normalize_text(&text, &mut dest);
        assert_eq!(&dest, b"MXRB3\0\0");
    }

    #[test]
    fn test_padding_is_stored_as_zeros() {
        let mut dest = [0xFFu8; 8];
        normalize_text("A@B@@", &mut dest);
        assert_eq!(&dest, b"A@B\0\0\0\0\0");

        normalize_text("@@@@", &mut dest);
        assert_eq!(dest, [0u8; 8]);
    }

    #[test]
    fn test_truncated_six_bit_text_is_zero_padded() {
        let (payload, padding) = PayloadBuilder::new().unsigned(0, 6).text("ABC", 3).build();
        let payload = SixBitPayload::new(payload.as_bytes(), padding).unwrap();
        // Field declared as 20 characters but only 3 are present
        let text = SixBitText::new(payload, 6, 120);

        let mut dest = [0xFFu8; 20];
        normalize_text(&text, &mut dest);
        assert_eq!(&dest[..3], b"ABC");
        assert!(dest[3..].iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(value in "[A-Z0-9 ]{0,30}", width in 1usize..25) {
            let mut first = vec![0x55u8; width];
            let mut second = vec![0xAAu8; width];
            normalize_text(value.as_str(), &mut first);
            normalize_text(value.as_str(), &mut second);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), width);
        }
    }
}
