//! TOML configuration file support.
//!
//! Instead of passing many CLI flags, users can specify settings in a config file:
//!
//! ```toml
//! # aisparq.toml
//! [conversion]
//! compression_level = 9
//! row_group_size = 100000
//! progress_interval_lines = 500000
//! validate_checksums = false
//! ```
//!
//! Values are layered: profile defaults, then the config file, then explicit
//! command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use aisparq::export::ExportConfig;
use aisparq::nmea::StreamConfig;
use aisparq::writer::CompressionType;

use super::Profile;

/// Root configuration structure for aisparq.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Configuration for the convert commands.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// ZSTD compression level (1-22).
    pub compression_level: Option<i32>,

    /// Number of rows per Parquet row group.
    pub row_group_size: Option<usize>,

    /// Lines between progress reports.
    pub progress_interval_lines: Option<u64>,

    /// Reject lines with a bad checksum.
    pub validate_checksums: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

/// Tuning flags shared by the convert commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TuningArgs {
    /// Conversion profile (fast, balanced, max-compression)
    #[arg(short = 'p', long, default_value_t = Profile::Balanced)]
    pub profile: Profile,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Lines between progress reports
    #[arg(long, value_name = "LINES")]
    pub progress_interval: Option<u64>,

    /// Accept sentences whose checksum does not match
    #[arg(long)]
    pub no_checksum: bool,

    // === Advanced tuning flags (hidden from --help) ===
    /// Compression level for ZSTD (1-22, default: profile-dependent)
    #[arg(short = 'c', long, hide = true)]
    pub compression_level: Option<i32>,

    /// Row group size (number of rows per row group)
    #[arg(short = 'r', long, hide = true)]
    pub row_group_size: Option<usize>,
}

/// Fully resolved settings for one conversion.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Export engine settings
    pub export: ExportConfig,
    /// Stream driver settings
    pub stream: StreamConfig,
}

impl TuningArgs {
    /// Layer profile defaults, the config file and explicit flags.
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        Ok(self.resolve_with(&file_config.conversion))
    }

    fn resolve_with(&self, file: &ConversionConfig) -> Settings {
        let mut writer = self.profile.writer_config();
        if let Some(level) = self.compression_level.or(file.compression_level) {
            writer.compression = CompressionType::Zstd(level);
        }

        let export = ExportConfig::default()
            .with_max_rows_per_group(
                self.row_group_size
                    .or(file.row_group_size)
                    .unwrap_or_else(|| self.profile.row_group_size()),
            )
            .with_writer(writer);

        let mut stream = StreamConfig::default();
        if let Some(interval) = self.progress_interval.or(file.progress_interval_lines) {
            stream.progress_interval_lines = interval;
        }
        stream.validate_checksums = if self.no_checksum {
            false
        } else {
            file.validate_checksums.unwrap_or(stream.validate_checksums)
        };

        Settings { export, stream }
    }
}
