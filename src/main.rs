use anyhow::{Context, Result};
use whirlpool_inspector::{
    apis::HttpClient,
    arguments::{get_endpoint_url, get_pool_filter, patterns, print_help},
    inspector::Inspector,
    logger::{self as logger, LogTag},
};

/// Entry point for the whirlpool inspector
///
/// Fetches the listing once, prints the summary (or the failure message) on
/// standard output and exits with status 1 on any failure.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    if patterns::is_version_requested() {
        println!("whirlpool-inspector {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let inspector = match build_inspector() {
        Ok(inspector) => inspector,
        Err(e) => {
            logger::error(LogTag::System, &format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = inspector.run_and_report(&mut out).await {
        logger::debug(LogTag::System, &format!("Inspection failed: {}", e));
        std::process::exit(1);
    }
}

fn build_inspector() -> Result<Inspector<HttpClient>> {
    let url = get_endpoint_url();
    let pool_filter = get_pool_filter();
    logger::debug(LogTag::System, &format!("Inspecting {}", url));
    if let Some(pool) = &pool_filter {
        logger::debug(LogTag::System, &format!("Looking up whirlpool {}", pool));
    }

    let client = HttpClient::new(url)
        .map_err(anyhow::Error::msg)
        .context("Startup failed")?;

    Ok(Inspector::new(client).with_pool_filter(pool_filter))
}
