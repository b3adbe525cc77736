use anyhow::Result;
use clap::{Parser, Subcommand};
use chrono::NaiveDateTime;
use std::path::PathBuf;

mod config;
mod convert;
mod convert_range;
mod demo;
mod info;
mod profile;

pub use config::TuningArgs;
pub use profile::Profile;

/// aisparq - AIS NMEA to Parquet converter
#[derive(Parser)]
#[command(name = "aisparq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an NMEA file to Parquet
    Convert {
        /// Input NMEA file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output Parquet file path (defaults to INPUT with a .parquet extension)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Convert a range of hourly files
    ///
    /// Reads INPUT_ROOT/raw-adjusted/YYYYMMDD/YYYYMMDDTHH.nm4 and writes
    /// OUTPUT_ROOT/parquet/YYYYMMDD/YYYYMMDDTHH.parquet for every hour in
    /// [START, END). Times off an hour boundary are rounded up.
    ConvertRange {
        /// Directory containing raw-adjusted/
        #[arg(long, value_name = "DIR")]
        input_root: PathBuf,

        /// Directory receiving parquet/
        #[arg(long, value_name = "DIR")]
        output_root: PathBuf,

        /// First hour (e.g. 2021-03-01T00:00)
        #[arg(long, value_parser = convert_range::parse_datetime)]
        start: NaiveDateTime,

        /// End of the range, exclusive
        #[arg(long, value_parser = convert_range::parse_datetime)]
        end: NaiveDateTime,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Generate a synthetic tagged NMEA file
    Demo {
        /// Output NMEA file path
        #[arg(value_name = "OUTPUT", default_value = "demo.nm4")]
        output: PathBuf,

        /// Number of messages to generate
        #[arg(short = 'n', long, default_value = "1000")]
        messages: usize,
    },

    /// Display information about an exported Parquet file
    Info {
        /// Input Parquet file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            json,
            tuning,
        } => convert::run(input, output, json, &tuning),
        Commands::ConvertRange {
            input_root,
            output_root,
            start,
            end,
            tuning,
        } => convert_range::run(input_root, output_root, start, end, &tuning),
        Commands::Demo { output, messages } => demo::run(output, messages),
        Commands::Info { file } => info::run(file),
    }
}
