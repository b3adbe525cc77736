use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use aisparq::ais::PayloadBuilder;
use aisparq::nmea::{encode_sentences, TagBlock};

/// First timestamp of the demo feed (2021-03-01T00:00:00Z)
const DEMO_START: i64 = 1_614_556_800;

/// Vessels in the demo fleet
const FLEET_SIZE: u32 = 25;

/// Generate a synthetic tagged NMEA file
pub fn run(output: PathBuf, messages: usize) -> Result<()> {
    info!("aisparq - Demo NMEA Generator");
    info!("=============================");
    info!("Creating demo feed: {}", output.display());

    let file = File::create(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut lines = 0usize;
    for i in 0..messages {
        for line in demo_message(i) {
            writeln!(writer, "{}", line)?;
            lines += 1;
        }
    }
    writer.flush()?;

    println!("Demo feed complete!");
    println!("  Output file: {}", output.display());
    println!("  Messages:    {}", messages);
    println!("  Lines:       {}", lines);
    println!(
        "  Convert with: aisparq convert {}",
        output.display()
    );
    Ok(())
}

/// NMEA lines for the `index`-th demo message.
///
/// Every block of ten messages holds six class A reports (types 1-3), one
/// class B report, one extended class B report, one static and voyage report
/// and one base station report, which the exporter skips.
fn demo_message(index: usize) -> Vec<String> {
    let vessel = index as u32 % FLEET_SIZE;
    let mmsi = 235_000_000 + vessel * 1_117;
    let step = (index / FLEET_SIZE as usize) as i32;
    let source = if index % 2 == 0 { "2" } else { "3" };
    let channel = if index % 2 == 0 { 'A' } else { 'B' };
    let tag = TagBlock::new(source, DEMO_START + index as i64);

    // Vessels fan out from 50N 1W, one ten-thousandth of a minute per step
    let lat = 30_000_000 + vessel as i32 * 6_000 + step * 40;
    let lon = -600_000 + vessel as i32 * 9_000 + step * 65;

    let (payload, padding) = match index % 10 {
        0..=5 => class_a((index % 3) as u32 + 1, mmsi, lat, lon, index),
        6 => class_b(mmsi, lat, lon, index),
        7 => extended_class_b(mmsi, lat, lon, vessel),
        8 => static_and_voyage(mmsi, vessel),
        _ => PayloadBuilder::new().unsigned(4, 6).unsigned(0, 2).unsigned(2_320_001, 30).unsigned(0, 130).build(),
    };

    encode_sentences(Some(&tag), channel, (index % 10) as u8, &payload, padding)
}

fn class_a(message_type: u32, mmsi: u32, lat: i32, lon: i32, index: usize) -> (String, u32) {
    PayloadBuilder::new()
        .unsigned(message_type, 6)
        .unsigned(0, 2)
        .unsigned(mmsi, 30)
        .unsigned(0, 4)
        .signed(0, 8)
        .unsigned(120 + (index % 40) as u32, 10)
        .flag(true)
        .signed(lon, 28)
        .signed(lat, 27)
        .unsigned(450 + (index % 900) as u32, 12)
        .unsigned(45 + (index % 90) as u32, 9)
        .unsigned((index % 60) as u32, 6)
        .unsigned(0, 2)
        .unsigned(0, 3)
        .flag(false)
        .unsigned(0, 2)
        .unsigned(2, 3)
        .unsigned((index % 16_384) as u32, 14)
        .build()
}

fn class_b(mmsi: u32, lat: i32, lon: i32, index: usize) -> (String, u32) {
    PayloadBuilder::new()
        .unsigned(18, 6)
        .unsigned(0, 2)
        .unsigned(mmsi, 30)
        .unsigned(0, 8)
        .unsigned(55, 10)
        .flag(false)
        .signed(lon, 28)
        .signed(lat, 27)
        .unsigned(900, 12)
        .unsigned(511, 9)
        .unsigned((index % 60) as u32, 6)
        .unsigned(0, 2)
        .flag(true)
        .flag(false)
        .flag(true)
        .flag(true)
        .flag(true)
        .flag(false)
        .flag(false)
        .unsigned(1, 1)
        .unsigned(0, 19)
        .build()
}

fn extended_class_b(mmsi: u32, lat: i32, lon: i32, vessel: u32) -> (String, u32) {
    PayloadBuilder::new()
        .unsigned(19, 6)
        .unsigned(0, 2)
        .unsigned(mmsi, 30)
        .unsigned(0, 8)
        .unsigned(80, 10)
        .flag(true)
        .signed(lon, 28)
        .signed(lat, 27)
        .unsigned(1800, 12)
        .unsigned(180, 9)
        .unsigned(30, 6)
        .unsigned(0, 4)
        .text(&format!("DEMO YACHT {}", vessel), 20)
        .unsigned(37, 8)
        .unsigned(8, 9)
        .unsigned(4, 9)
        .unsigned(2, 6)
        .unsigned(2, 6)
        .unsigned(1, 4)
        .flag(false)
        .flag(true)
        .flag(false)
        .unsigned(0, 4)
        .build()
}

fn static_and_voyage(mmsi: u32, vessel: u32) -> (String, u32) {
    PayloadBuilder::new()
        .unsigned(5, 6)
        .unsigned(0, 2)
        .unsigned(mmsi, 30)
        .unsigned(0, 2)
        .unsigned(9_100_000 + vessel, 30)
        .text(&format!("DMO{:04}", vessel), 7)
        .text(&format!("DEMO VESSEL {}", vessel), 20)
        .unsigned(70, 8)
        .unsigned(120, 9)
        .unsigned(30, 9)
        .unsigned(10, 6)
        .unsigned(10, 6)
        .unsigned(1, 4)
        .unsigned(3, 4)
        .unsigned(1 + vessel % 28, 5)
        .unsigned(12, 5)
        .unsigned(0, 6)
        .unsigned(85, 8)
        .text("ROTTERDAM", 20)
        .flag(false)
        .unsigned(0, 1)
        .build()
}
