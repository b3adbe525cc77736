/// XOR of all bytes, as used by NMEA sentence and tag block checksums.
pub fn nmea_checksum(data: &str) -> u8 {
    data.bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Split `body*hh` into the body and verify the two-digit hex checksum.
///
/// Lines without a `*` are returned whole when `validate` is false.
pub(crate) fn split_checksum(
    text: &str,
    validate: bool,
) -> Result<&str, super::NmeaError> {
    let Some((body, found)) = text.rsplit_once('*') else {
        if validate {
            return Err(super::NmeaError::Checksum {
                expected: nmea_checksum(text),
                found: String::new(),
            });
        }
        return Ok(text);
    };

    if validate {
        let expected = nmea_checksum(body);
        let parsed = u8::from_str_radix(found.trim(), 16).ok();
        if parsed != Some(expected) {
            return Err(super::NmeaError::Checksum {
                expected,
                found: found.to_string(),
            });
        }
    }

    Ok(body)
}
