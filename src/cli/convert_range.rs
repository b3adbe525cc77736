use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Timelike};
use log::{info, warn};
use std::path::{Path, PathBuf};

use aisparq::export::convert_file;
use aisparq::schema::{AIS_PARQUET_EXTENSION, NMEA_EXTENSION};

use super::config::Settings;
use super::TuningArgs;

/// One hourly file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyJob {
    pub hour: NaiveDateTime,
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Parse `2021-03-01T13:00`, `2021-03-01 13:00:00` or an RFC 3339 timestamp.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }
    if let Some(midnight) = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight);
    }
    Err(format!("'{text}' is not a date and time such as 2021-03-01T13:00"))
}

/// Round up to the next hour unless already on an hour boundary.
pub fn round_up_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    let floor = time
        .date()
        .and_hms_opt(time.hour(), 0, 0)
        .unwrap_or(time);
    if time > floor {
        floor + Duration::hours(1)
    } else {
        floor
    }
}

/// Every hour in `[start, end)` after rounding both ends up.
pub fn plan_hours(
    input_root: &Path,
    output_root: &Path,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<HourlyJob>> {
    let mut hour = round_up_to_hour(start);
    let end = round_up_to_hour(end);
    if hour >= end {
        anyhow::bail!("Empty time range: {} is not before {}", hour, end);
    }

    let mut jobs = Vec::new();
    while hour < end {
        let day = hour.format("%Y%m%d").to_string();
        let stem = hour.format("%Y%m%dT%H").to_string();
        jobs.push(HourlyJob {
            hour,
            source: input_root
                .join("raw-adjusted")
                .join(&day)
                .join(format!("{stem}.{NMEA_EXTENSION}")),
            target: output_root
                .join("parquet")
                .join(&day)
                .join(format!("{stem}.{AIS_PARQUET_EXTENSION}")),
        });
        hour += Duration::hours(1);
    }
    Ok(jobs)
}

/// Counters for one range conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOutcome {
    pub converted: usize,
    pub missing: usize,
    pub failed: usize,
    pub rows: u64,
}

/// Run every job; a failed hour is logged and does not stop the others.
pub fn run_jobs(jobs: &[HourlyJob], settings: &Settings) -> RangeOutcome {
    let mut outcome = RangeOutcome::default();
    for job in jobs {
        if !job.source.exists() {
            warn!("Skipping {}: input not found", job.source.display());
            outcome.missing += 1;
            continue;
        }

        info!("Converting '{}' to '{}'", job.source.display(), job.target.display());
        match convert_job(job, settings) {
            Ok(rows) => {
                outcome.rows += rows;
                outcome.converted += 1;
            }
            Err(e) => {
                warn!("Hour {} failed: {:#}", job.hour, e);
                outcome.failed += 1;
            }
        }
    }
    outcome
}

fn convert_job(job: &HourlyJob, settings: &Settings) -> Result<u64> {
    if let Some(parent) = job.target.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let (_, stats) = convert_file(&job.source, &job.target, &settings.export, settings.stream)
        .with_context(|| format!("Conversion of {} failed", job.source.display()))?;
    Ok(stats.rows_ingested)
}

/// Convert every hourly file in a time range
pub fn run(
    input_root: PathBuf,
    output_root: PathBuf,
    start: NaiveDateTime,
    end: NaiveDateTime,
    tuning: &TuningArgs,
) -> Result<()> {
    let settings = tuning.resolve()?;
    let jobs = plan_hours(&input_root, &output_root, start, end)?;
    info!("Converting {} hourly files", jobs.len());

    let outcome = run_jobs(&jobs, &settings);

    println!(
        "Converted {} of {} hourly files ({} missing, {} failed), {} rows",
        outcome.converted,
        jobs.len(),
        outcome.missing,
        outcome.failed,
        outcome.rows
    );
    if outcome.failed > 0 {
        anyhow::bail!("{} of {} hourly files failed to convert", outcome.failed, jobs.len());
    }
    Ok(())
}
