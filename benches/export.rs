use aisparq::ais::{AisDecoder, PayloadBuilder, PayloadDecoder};
use aisparq::export::{convert_file, ExportConfig};
use aisparq::nmea::{encode_sentences, NmeaStreamParser, StreamConfig, TagBlock};
use aisparq::writer::WriterConfig;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

const CLASS_A: &[u8] = b"15RTgt0PAso;90TKcjM8h6g208CQ";

/// Generate a synthetic tagged NMEA feed of class A and static reports
fn generate_test_feed(path: &std::path::Path, num_messages: usize) {
    let mut content = String::with_capacity(num_messages * 80);
    for i in 0..num_messages {
        let tag = TagBlock::new("7", 1_614_556_800 + i as i64);
        let (payload, padding) = if i % 20 == 19 {
            PayloadBuilder::new()
                .unsigned(5, 6)
                .unsigned(0, 2)
                .unsigned(244_000_000 + i as u32, 30)
                .unsigned(0, 32)
                .text("PH1234", 7)
                .text("BENCH VESSEL", 20)
                .unsigned(0, 70)
                .text("AMSTERDAM", 20)
                .unsigned(0, 2)
                .build()
        } else {
            PayloadBuilder::new()
                .unsigned(1, 6)
                .unsigned(0, 2)
                .unsigned(244_000_000 + (i % 500) as u32, 30)
                .unsigned(0, 12)
                .unsigned(100, 10)
                .flag(true)
                .signed(2_400_000 + i as i32, 28)
                .signed(31_500_000 - i as i32, 27)
                .unsigned(0, 52)
                .build()
        };
        for line in encode_sentences(Some(&tag), 'A', (i % 10) as u8, &payload, padding) {
            content.push_str(&line);
            content.push('\n');
        }
    }
    fs::write(path, content).expect("Failed to write test NMEA");
}

fn bench_decode(c: &mut Criterion) {
    let decoder = AisDecoder::new();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(1));
    group.bench_function("class_a", |b| {
        b.iter(|| decoder.decode(black_box(CLASS_A), 0).map(|r| r.message_type()))
    });
    group.finish();
}

fn bench_stream_parse(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("feed.nm4");
    generate_test_feed(&input, 20_000);

    struct Discard;
    impl aisparq::ingest::AisMessageProcessor for Discard {
        type Error = std::io::Error;
        fn on_next(
            &mut self,
            _header: &TagBlock<'_>,
            payload: &[u8],
            _padding: u32,
        ) -> Result<(), Self::Error> {
            black_box(payload.len());
            Ok(())
        }

        fn on_completed(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn progress(&self, _report: &aisparq::ingest::ProgressReport) {}
    }

    let mut group = c.benchmark_group("nmea");
    group.throughput(Throughput::Elements(20_000));
    group.bench_function("parse_20k", |b| {
        b.iter(|| {
            NmeaStreamParser::new()
                .parse_file(&input, &mut Discard)
                .expect("parse failed")
        })
    });
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("feed.nm4");
    generate_test_feed(&input, 50_000);

    let mut group = c.benchmark_group("convert");
    group.sample_size(10);
    group.throughput(Throughput::Elements(50_000));

    for (name, writer) in [
        ("default", WriterConfig::default()),
        ("fast_write", WriterConfig::fast_write()),
    ] {
        for rows_per_group in [10_000usize, 100_000] {
            let config = ExportConfig::default()
                .with_max_rows_per_group(rows_per_group)
                .with_writer(writer.clone());
            group.bench_with_input(
                BenchmarkId::new(name, rows_per_group),
                &config,
                |b, config| {
                    b.iter(|| {
                        let output = temp_dir.path().join("feed.parquet");
                        convert_file(&input, &output, config, StreamConfig::default())
                            .expect("conversion failed")
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_stream_parse, bench_convert);
criterion_main!(benches);
