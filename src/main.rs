//! # NAVER Realtime
//!
//! Collects two realtime lists by rendering dynamic pages through headless
//! Chrome: trending search keywords (Google Trends, KR) and NAVER's popular
//! article ranking. The rendered markup is parsed, normalized, deduplicated,
//! and capped at 10 entries per list.
//!
//! ## Usage
//!
//! ```sh
//! naver_realtime            # text report
//! naver_realtime --json     # JSON on stdout
//! naver_realtime -o out.json
//! ```
//!
//! ## Architecture
//!
//! One collection run is strictly sequential:
//! 1. **Launch**: start headless Chrome (or bail out into a warning-only
//!    snapshot when Chrome cannot start)
//! 2. **Scrape**: trending keywords first, popular articles second, both
//!    against the same browser instance
//! 3. **Assemble**: derive fallback keywords from headlines when the
//!    trending page gave nothing, attach warnings, stamp the time
//! 4. **Emit**: text or JSON on stdout, optionally a JSON file

use clap::Parser;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod collector;
mod keywords;
mod models;
mod outputs;
mod renderer;
mod scrapers;
mod utils;

use cli::Cli;

#[tokio::main]
#[instrument]
async fn main() {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("naver_realtime starting up");

    let args = Cli::parse();
    debug!(?args.json, ?args.no_headless, ?args.out, "Parsed CLI arguments");

    let snapshot = collector::collect(!args.no_headless).await;

    if let Some(ref path) = args.out {
        if let Err(e) = outputs::json::write_snapshot(&snapshot, path).await {
            error!(path = %path, error = %e, "Failed writing snapshot JSON");
        }
    }

    if args.json {
        match outputs::json::to_pretty_json(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => error!(error = %e, "Failed serializing snapshot"),
        }
    } else {
        print!("{}", outputs::text::render_report(&snapshot));
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
}
