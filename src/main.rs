//! # aisparq
//!
//! A command-line tool for converting AIS NMEA feeds to Parquet.
//!
//! ## Usage
//!
//! ```bash
//! # Convert one file
//! aisparq convert 20210301T00.nm4 20210301T00.parquet
//!
//! # Convert a day of hourly files
//! aisparq convert-range --input-root data --output-root data \
//!     --start 2021-03-01T00:00 --end 2021-03-02T00:00
//!
//! # Generate demo data and inspect the result
//! aisparq demo demo.nm4
//! aisparq convert demo.nm4 && aisparq info demo.parquet
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
