use super::checksum::{nmea_checksum, split_checksum};
use super::error::NmeaError;

/// Sentence grouping from a `g:` field (`number-count-id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceGroup {
    /// One-based sentence number within the group
    pub number: u32,
    /// Number of sentences in the group
    pub count: u32,
    /// Group identifier
    pub id: u32,
}

/// Provenance metadata carried in front of an NMEA sentence.
///
/// Only the fields the exporter reads are decoded; unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagBlock<'a> {
    /// `s:` source (receiver) identifier, raw text
    pub source: Option<&'a str>,
    /// `c:` Unix timestamp
    pub unix_timestamp: Option<i64>,
    /// `g:` sentence grouping
    pub group: Option<SentenceGroup>,
    /// `n:` line count
    pub line_count: Option<u32>,
    /// `t:` free text
    pub text: Option<&'a str>,
}

impl<'a> TagBlock<'a> {
    /// Build a tag block carrying a source and a timestamp.
    pub fn new(source: &'a str, unix_timestamp: i64) -> Self {
        Self {
            source: Some(source),
            unix_timestamp: Some(unix_timestamp),
            ..Self::default()
        }
    }

    /// Parse the content between the backslashes, e.g. `s:42,c:1614556800*hh`.
    pub fn parse(content: &'a str, validate_checksum: bool) -> Result<Self, NmeaError> {
        let body = split_checksum(content, validate_checksum)?;
        let mut tag = TagBlock::default();

        for field in body.split(',').filter(|f| !f.is_empty()) {
            let (key, value) = field
                .split_once(':')
                .ok_or_else(|| NmeaError::MalformedTagField(field.to_string()))?;
            match key {
                "s" => tag.source = Some(value),
                "c" => tag.unix_timestamp = Some(parse_number("timestamp", value)?),
                "n" => tag.line_count = Some(parse_number("line count", value)?),
                "t" => tag.text = Some(value),
                "g" => tag.group = Some(parse_group(value)?),
                _ => {}
            }
        }

        Ok(tag)
    }

    /// The source identifier as an integer.
    ///
    /// Parses the leading decimal digits of the source field; any value
    /// without them (including a missing field or an overflow) yields 0.
    pub fn source_id(&self) -> i32 {
        self.source.map(parse_leading_int).unwrap_or(0)
    }

    /// Render as `\s:..,c:..*hh\`, the inverse of [`TagBlock::parse`].
    pub fn format(&self) -> String {
        let mut fields = Vec::new();
        if let Some(source) = self.source {
            fields.push(format!("s:{source}"));
        }
        if let Some(ts) = self.unix_timestamp {
            fields.push(format!("c:{ts}"));
        }
        if let Some(group) = self.group {
            fields.push(format!("g:{}-{}-{}", group.number, group.count, group.id));
        }
        if let Some(n) = self.line_count {
            fields.push(format!("n:{n}"));
        }
        if let Some(text) = self.text {
            fields.push(format!("t:{text}"));
        }
        let body = fields.join(",");
        format!("\\{}*{:02X}\\", body, nmea_checksum(&body))
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, NmeaError> {
    value.parse().map_err(|_| NmeaError::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_group(value: &str) -> Result<SentenceGroup, NmeaError> {
    let mut parts = value.splitn(3, '-');
    let mut next = || parse_number::<u32>("group", parts.next().unwrap_or(""));
    Ok(SentenceGroup {
        number: next()?,
        count: next()?,
        id: next()?,
    })
}

/// Parse an optionally signed run of leading digits; 0 when there are none.
fn parse_leading_int(text: &str) -> i32 {
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'-') | Some(b'+')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    text[..sign_len + digits].parse().unwrap_or(0)
}

/// Split a raw line into its optional tag block content and the sentence.
pub(crate) fn split_tag_block(line: &str) -> Result<(Option<&str>, &str), NmeaError> {
    match line.strip_prefix('\\') {
        Some(rest) => {
            let end = rest.find('\\').ok_or(NmeaError::UnterminatedTagBlock)?;
            Ok((Some(&rest[..end]), &rest[end + 1..]))
        }
        None => Ok((None, line)),
    }
}
