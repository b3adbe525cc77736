use super::checksum::{nmea_checksum, split_checksum};
use super::error::NmeaError;
use super::tag_block::TagBlock;

/// Longest payload carried by a single sentence when encoding.
pub const MAX_FRAGMENT_PAYLOAD: usize = 60;

/// One `!AIVDM` / `!AIVDO` sentence (possibly a fragment of a longer message).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NmeaSentence<'a> {
    /// Talker and formatter, e.g. `AIVDM`
    pub talker: &'a str,
    /// Number of fragments in the message
    pub fragment_count: u8,
    /// One-based fragment number
    pub fragment_number: u8,
    /// Sequential message id linking fragments
    pub sequential_id: Option<u8>,
    /// Radio channel (`A`/`B`/`1`/`2`)
    pub channel: Option<&'a str>,
    /// Armored payload
    pub payload: &'a str,
    /// Fill bits at the end of the payload
    pub padding: u32,
}

impl<'a> NmeaSentence<'a> {
    /// Parse a sentence without its tag block.
    pub fn parse(sentence: &'a str, validate_checksum: bool) -> Result<Self, NmeaError> {
        let body = sentence
            .strip_prefix('!')
            .or_else(|| sentence.strip_prefix('$'))
            .ok_or(NmeaError::NotASentence)?;
        let body = split_checksum(body, validate_checksum)?;

        let fields: Vec<&str> = body.split(',').collect();
        if fields.len() != 7 {
            return Err(NmeaError::FieldCount {
                expected: 7,
                found: fields.len(),
            });
        }

        let talker = fields[0];
        if !(talker.ends_with("VDM") || talker.ends_with("VDO")) {
            return Err(NmeaError::UnsupportedSentence(talker.to_string()));
        }

        let fragment_count = parse_field("fragment count", fields[1])?;
        let fragment_number = parse_field("fragment number", fields[2])?;
        if fragment_count == 0 || fragment_number == 0 || fragment_number > fragment_count {
            return Err(NmeaError::InvalidField {
                field: "fragment number",
                value: format!("{}/{}", fields[2], fields[1]),
            });
        }

        let sequential_id = match fields[3] {
            "" => None,
            id => Some(parse_field("sequential id", id)?),
        };
        let channel = Some(fields[4]).filter(|c| !c.is_empty());
        let padding = match fields[6] {
            "" => 0,
            p => parse_field("padding", p)?,
        };

        Ok(Self {
            talker,
            fragment_count,
            fragment_number,
            sequential_id,
            channel,
            payload: fields[5],
            padding,
        })
    }

    /// True when this sentence is a whole message.
    pub fn is_complete(&self) -> bool {
        self.fragment_count == 1
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, NmeaError> {
    value.parse().map_err(|_| NmeaError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// A raw line split into tag block and sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NmeaLine<'a> {
    /// Raw tag block content (between the backslashes), if present
    pub tag_block_content: Option<&'a str>,
    /// Parsed tag block (default when absent)
    pub tag_block: TagBlock<'a>,
    /// Parsed sentence
    pub sentence: NmeaSentence<'a>,
}

impl<'a> NmeaLine<'a> {
    /// Parse one input line.
    pub fn parse(line: &'a str, validate_checksums: bool) -> Result<Self, NmeaError> {
        let (tag_block_content, sentence) = super::tag_block::split_tag_block(line)?;
        let tag_block = match tag_block_content {
            Some(content) => TagBlock::parse(content, validate_checksums)?,
            None => TagBlock::default(),
        };
        Ok(Self {
            tag_block_content,
            tag_block,
            sentence: NmeaSentence::parse(sentence, validate_checksums)?,
        })
    }
}

/// Encode a payload as one or more checksummed `!AIVDM` lines.
///
/// The tag block, when given, is attached to the first line only. Payloads
/// longer than [`MAX_FRAGMENT_PAYLOAD`] are split into fragments sharing
/// `sequential_id`; the fill bits go on the last fragment.
pub fn encode_sentences(
    tag_block: Option<&TagBlock<'_>>,
    channel: char,
    sequential_id: u8,
    payload: &str,
    padding: u32,
) -> Vec<String> {
    let chunks: Vec<&str> = if payload.is_empty() {
        vec![""]
    } else {
        payload
            .as_bytes()
            .chunks(MAX_FRAGMENT_PAYLOAD)
            .map(|c| std::str::from_utf8(c).unwrap_or_default())
            .collect()
    };
    let count = chunks.len();

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let number = i + 1;
            let id = if count > 1 {
                sequential_id.to_string()
            } else {
                String::new()
            };
            let fill = if number == count { padding } else { 0 };
            let body = format!("AIVDM,{count},{number},{id},{channel},{chunk},{fill}");
            let sentence = format!("!{}*{:02X}", body, nmea_checksum(&body));
            match (i, tag_block) {
                (0, Some(tag)) => format!("{}{}", tag.format(), sentence),
                _ => sentence,
            }
        })
        .collect()
}
