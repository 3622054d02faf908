//! Command-line interface definitions.
//!
//! This module defines the CLI flags using the `clap` crate. The flags only
//! shape presentation and the browser window; extraction behavior is fixed.

use clap::Parser;

/// Command-line arguments for the realtime collector.
///
/// # Examples
///
/// ```sh
/// # Text report on stdout
/// naver_realtime
///
/// # JSON on stdout, browser window visible
/// naver_realtime --json --no-headless
///
/// # Text report on stdout plus a JSON file
/// naver_realtime -o ./snapshot.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Print the snapshot as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Show the browser window while scraping
    #[arg(long)]
    pub no_headless: bool,

    /// Also write the snapshot JSON to this file
    #[arg(short, long)]
    pub out: Option<String>,
}
