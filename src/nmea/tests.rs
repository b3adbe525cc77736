use std::io::Cursor;

use super::*;
use crate::ingest::{AisMessageProcessor, ProgressReport};

const TAGGED_LINE: &str =
    "\\s:42,c:1614556800*36\\!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*49";

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Message {
        source: Option<String>,
        timestamp: Option<i64>,
        payload: String,
        padding: u32,
    },
    Completed,
    Progress(ProgressReport),
}

#[derive(Default)]
struct Recorder {
    events: std::cell::RefCell<Vec<Event>>,
}

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    fn messages(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| matches!(e, Event::Message { .. }))
            .collect()
    }
}

impl AisMessageProcessor for Recorder {
    type Error = std::io::Error;

    fn on_next(&mut self, header: &TagBlock<'_>, payload: &[u8], padding: u32) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(Event::Message {
            source: header.source.map(str::to_string),
            timestamp: header.unix_timestamp,
            payload: String::from_utf8_lossy(payload).into_owned(),
            padding,
        });
        Ok(())
    }

    fn on_completed(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(Event::Completed);
        Ok(())
    }

    fn progress(&self, report: &ProgressReport) {
        self.events.borrow_mut().push(Event::Progress(*report));
    }
}

fn parse(input: &str, config: StreamConfig) -> (StreamSummary, Recorder) {
    let mut recorder = Recorder::default();
    let summary = NmeaStreamParser::with_config(config)
        .parse_reader(Cursor::new(input.as_bytes()), &mut recorder)
        .unwrap();
    (summary, recorder)
}

#[test]
fn test_checksum() {
    assert_eq!(nmea_checksum("s:42,c:1614556800"), 0x36);
    assert_eq!(nmea_checksum("AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0"), 0x49);
}

#[test]
fn test_tag_block_parse() {
    let tag = TagBlock::parse("s:42,c:1614556800,g:1-2-77*00", false).unwrap();
    assert_eq!(tag.source, Some("42"));
    assert_eq!(tag.unix_timestamp, Some(1_614_556_800));
    assert_eq!(
        tag.group,
        Some(SentenceGroup {
            number: 1,
            count: 2,
            id: 77
        })
    );
    assert_eq!(tag.source_id(), 42);

    assert!(matches!(
        TagBlock::parse("s:42,c:1614556800*00", true),
        Err(NmeaError::Checksum { expected: 0x36, .. })
    ));
    assert!(matches!(
        TagBlock::parse("s:42,c:soon", false),
        Err(NmeaError::InvalidField { field: "timestamp", .. })
    ));
}

#[test]
fn test_source_id_defaults_to_zero() {
    assert_eq!(TagBlock::new("1234abc", 0).source_id(), 1234);
    assert_eq!(TagBlock::new("-7", 0).source_id(), -7);
    assert_eq!(TagBlock::new("receiver-3", 0).source_id(), 0);
    assert_eq!(TagBlock::new("99999999999", 0).source_id(), 0);
    assert_eq!(TagBlock::default().source_id(), 0);
}

#[test]
fn test_tag_block_format_parses_back() {
    let tag = TagBlock::new("42", 1_614_556_800);
    let formatted = tag.format();
    assert_eq!(formatted, "\\s:42,c:1614556800*36\\");

    let content = &formatted[1..formatted.len() - 1];
    assert_eq!(TagBlock::parse(content, true).unwrap(), tag);
}

#[test]
fn test_sentence_parse() {
    let line = NmeaLine::parse(TAGGED_LINE, true).unwrap();
    assert_eq!(line.tag_block.source_id(), 42);

    let sentence = line.sentence;
    assert_eq!(sentence.talker, "AIVDM");
    assert_eq!((sentence.fragment_count, sentence.fragment_number), (1, 1));
    assert_eq!(sentence.sequential_id, None);
    assert_eq!(sentence.channel, Some("B"));
    assert_eq!(sentence.payload, "15RTgt0PAso;90TKcjM8h6g208CQ");
    assert_eq!(sentence.padding, 0);
    assert!(sentence.is_complete());
}

#[test]
fn test_sentence_rejects_malformed_input() {
    assert_eq!(
        NmeaSentence::parse("AIVDM,1,1,,B,x,0", false),
        Err(NmeaError::NotASentence)
    );
    assert!(matches!(
        NmeaSentence::parse("!AIVDM,1,1,,B,x", false),
        Err(NmeaError::FieldCount { expected: 7, found: 6 })
    ));
    assert!(matches!(
        NmeaSentence::parse("$GPGGA,1,2,3,4,5,6", false),
        Err(NmeaError::UnsupportedSentence(_))
    ));
    assert!(matches!(
        NmeaSentence::parse("!AIVDM,2,3,,B,x,0", false),
        Err(NmeaError::InvalidField { .. })
    ));
    assert!(matches!(
        NmeaSentence::parse("!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*00", true),
        Err(NmeaError::Checksum { .. })
    ));
    assert!(matches!(
        NmeaLine::parse("\\s:1,c:2!AIVDM,1,1,,B,x,0", false),
        Err(NmeaError::UnterminatedTagBlock)
    ));
}

#[test]
fn test_encode_single_sentence() {
    let tag = TagBlock::new("42", 1_614_556_800);
    let lines = encode_sentences(Some(&tag), 'B', 0, "15RTgt0PAso;90TKcjM8h6g208CQ", 0);
    assert_eq!(lines, vec![TAGGED_LINE.to_string()]);
}

#[test]
fn test_encode_splits_long_payloads() {
    let payload = "5".repeat(71);
    let tag = TagBlock::new("7", 100);
    let lines = encode_sentences(Some(&tag), 'A', 3, &payload, 2);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("\\s:7,c:100*"));
    assert!(lines[1].starts_with("!AIVDM,2,2,3,A,"));

    let first = NmeaLine::parse(&lines[0], true).unwrap().sentence;
    let second = NmeaLine::parse(&lines[1], true).unwrap().sentence;
    assert_eq!(first.payload.len(), MAX_FRAGMENT_PAYLOAD);
    assert_eq!(first.padding, 0);
    assert_eq!(second.payload.len(), 11);
    assert_eq!(second.padding, 2);
    assert_eq!(second.sequential_id, Some(3));
}

#[test]
fn test_stream_delivers_messages_in_order() {
    let mut input = String::new();
    for (i, ts) in [10i64, 20, 30].iter().enumerate() {
        let tag = TagBlock::new("5", *ts);
        let payload = format!("1{i}");
        for line in encode_sentences(Some(&tag), 'A', 0, &payload, 0) {
            input.push_str(&line);
            input.push_str("\r\n");
        }
    }

    let (summary, recorder) = parse(&input, StreamConfig::default());
    assert_eq!(summary.lines, 3);
    assert_eq!(summary.messages, 3);
    assert_eq!(summary.rejected_lines, 0);

    let timestamps: Vec<_> = recorder
        .messages()
        .into_iter()
        .map(|e| match e {
            Event::Message { timestamp, .. } => timestamp,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(timestamps, vec![Some(10), Some(20), Some(30)]);
}

#[test]
fn test_stream_reassembles_fragments() {
    let payload = format!("5{}", "0".repeat(70));
    let tag = TagBlock::new("314", 1_700_000_000);
    let lines = encode_sentences(Some(&tag), 'B', 6, &payload, 2);
    // A later fragment carrying its own tag block must not replace the header.
    let second = format!("{}{}", TagBlock::new("999", 1).format(), lines[1]);
    let input = format!("{}\n{}\n", lines[0], second);

    let (summary, recorder) = parse(&input, StreamConfig::default());
    assert_eq!(summary.messages, 1);
    assert_eq!(
        recorder.messages(),
        vec![Event::Message {
            source: Some("314".to_string()),
            timestamp: Some(1_700_000_000),
            payload,
            padding: 2,
        }]
    );
}

#[test]
fn test_stream_skips_bad_lines() {
    let payload = "5".repeat(71);
    let fragments = encode_sentences(None, 'A', 1, &payload, 2);
    let input = [
        "garbage",
        "",
        TAGGED_LINE,
        // second fragment without its first
        fragments[1].as_str(),
        "!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*00",
        TAGGED_LINE,
    ]
    .join("\n");

    let (summary, recorder) = parse(&input, StreamConfig::default());
    assert_eq!(summary.lines, 6);
    assert_eq!(summary.messages, 2);
    assert_eq!(summary.rejected_lines, 3);
    assert_eq!(recorder.messages().len(), 2);
}

#[test]
fn test_stream_checksum_validation_can_be_disabled() {
    let input = "\\s:42,c:1614556800*00\\!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*00\n";
    let config = StreamConfig {
        validate_checksums: false,
        ..StreamConfig::default()
    };
    let (summary, _) = parse(input, config);
    assert_eq!(summary.messages, 1);

    let (summary, _) = parse(input, StreamConfig::default());
    assert_eq!(summary.messages, 0);
    assert_eq!(summary.rejected_lines, 1);
}

#[test]
fn test_stream_rejects_messages_without_timestamp() {
    let untagged = "!AIVDM,1,1,,B,15RTgt0PAso;90TKcjM8h6g208CQ,0*49";
    let no_time = format!("{}{}", "\\s:42*4F\\", untagged);
    assert_eq!(nmea_checksum("s:42"), 0x4F);

    let payload = "5".repeat(71);
    let fragments = encode_sentences(Some(&TagBlock { source: Some("7"), ..TagBlock::default() }), 'A', 2, &payload, 2);

    let input = [
        TAGGED_LINE,
        untagged,
        TAGGED_LINE,
        no_time.as_str(),
        fragments[0].as_str(),
        fragments[1].as_str(),
        TAGGED_LINE,
    ]
    .join("\n");

    let (summary, recorder) = parse(&input, StreamConfig::default());
    assert_eq!(summary.lines, 7);
    assert_eq!(summary.messages, 3);
    assert_eq!(summary.rejected_lines, 3);
    assert_eq!(summary.incomplete_messages, 0);

    let messages = recorder.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages
        .iter()
        .all(|e| matches!(e, Event::Message { timestamp: Some(1_614_556_800), .. })));
    assert_eq!(recorder.events().iter().filter(|e| **e == Event::Completed).count(), 1);
}

#[test]
fn test_stream_counts_abandoned_fragments() {
    let payload = "5".repeat(71);
    let fragments = encode_sentences(None, 'A', 4, &payload, 2);
    let input = format!("{}\n", fragments[0]);

    let (summary, recorder) = parse(&input, StreamConfig::default());
    assert_eq!(summary.messages, 0);
    assert_eq!(summary.incomplete_messages, 1);
    assert!(recorder.messages().is_empty());
}

#[test]
fn test_progress_then_completion_order() {
    let input = format!("{TAGGED_LINE}\n{TAGGED_LINE}\n{TAGGED_LINE}\n{TAGGED_LINE}\n{TAGGED_LINE}\n");
    let config = StreamConfig {
        progress_interval_lines: 2,
        ..StreamConfig::default()
    };
    let (_, recorder) = parse(&input, config);
    let events = recorder.events();

    let reports: Vec<ProgressReport> = events
        .iter()
        .filter_map(|e| match e {
            Event::Progress(r) => Some(*r),
            _ => None,
        })
        .collect();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].total_lines, 2);
    assert_eq!(reports[1].total_lines, 4);
    assert_eq!(reports[1].lines_since_last, 2);
    assert!(!reports[1].done);
    assert!(reports[2].done);
    assert_eq!(reports[2].total_messages, 5);
    assert_eq!(reports[2].lines_since_last, 1);

    let completed_at = events.iter().position(|e| *e == Event::Completed).unwrap();
    assert_eq!(completed_at, events.len() - 2);
    assert!(matches!(events.last(), Some(Event::Progress(r)) if r.done));
}

#[test]
fn test_processor_error_aborts_without_completion() {
    struct Failing {
        completed: bool,
    }

    impl AisMessageProcessor for Failing {
        type Error = std::io::Error;

        fn on_next(&mut self, _: &TagBlock<'_>, _: &[u8], _: u32) -> Result<(), Self::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "sink full"))
        }

        fn on_completed(&mut self) -> Result<(), Self::Error> {
            self.completed = true;
            Ok(())
        }

        fn progress(&self, _: &ProgressReport) {}
    }

    let mut failing = Failing { completed: false };
    let result = NmeaStreamParser::new().parse_reader(Cursor::new(TAGGED_LINE.as_bytes()), &mut failing);
    assert!(result.is_err());
    assert!(!failing.completed);
}
