/// Command-line argument handling for the whirlpool inspector
///
/// Arguments are stored once in a process-wide `CMD_ARGS` read by the logger
/// and the binary. Tests override it with [`set_cmd_args`].
use crate::constants::{SOL_USDC_WHIRLPOOL, SOL_USDC_WHIRLPOOL_ALIAS, WHIRLPOOL_LIST_URL};
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        // Poisoned mutex: fall back to the real process arguments
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value following a flag, `None` if the flag is absent or last
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .filter(|value| !value.starts_with("--"))
        .cloned()
}

// =============================================================================
// INSPECTOR OPTIONS
// =============================================================================

/// Listing endpoint, `--url` overrides the mainnet default
pub fn get_endpoint_url() -> String {
    get_arg_value("--url").unwrap_or_else(|| WHIRLPOOL_LIST_URL.to_string())
}

/// Whirlpool address requested with `--pool`, with the `sol-usdc` alias resolved
pub fn get_pool_filter() -> Option<String> {
    get_arg_value("--pool").map(|value| {
        if value.eq_ignore_ascii_case(SOL_USDC_WHIRLPOOL_ALIAS) {
            SOL_USDC_WHIRLPOOL.to_string()
        } else {
            value
        }
    })
}

/// Prints usage information
pub fn print_help() {
    println!("whirlpool-inspector - Orca whirlpool listing inspector");
    println!();
    println!("USAGE:");
    println!("    whirlpool-inspector [FLAGS]");
    println!();
    println!("OPTIONS:");
    println!("    --url <URL>               Listing endpoint (default: {})", WHIRLPOOL_LIST_URL);
    println!("    --pool <ADDRESS>          Also print the whirlpool with this address");
    println!(
        "                              ('{}' selects {})",
        SOL_USDC_WHIRLPOOL_ALIAS, SOL_USDC_WHIRLPOOL
    );
    println!("    --help, -h                Show this help message");
    println!("    --version, -V             Show version");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-api               HTTP client debug mode");
    println!("    --debug-inspector         Inspector debug mode");
    println!("    --debug-system            System debug mode");
    println!("    --verbose                 Very detailed tracing for all modules");
    println!("    --quiet                   Only log errors");
    println!("    --log-level <LEVEL>       error, warning, info, debug or verbose");
    println!();
    println!("EXAMPLES:");
    println!("    whirlpool-inspector");
    println!("    whirlpool-inspector --pool sol-usdc");
    println!("    whirlpool-inspector --url http://127.0.0.1:8080/list --debug-api");
}

/// Common argument parsing patterns
pub mod patterns {
    use super::*;

    /// Checks for help flags
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    /// Checks for version flags
    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }
}
