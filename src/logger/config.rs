/// Logger configuration derived from command-line flags
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Messages above this level are dropped (Debug/Verbose have extra gates)
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled, stored as debug keys
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from raw arguments
    ///
    /// `--quiet` wins over `--verbose`; `--log-level <level>` wins over both.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for tag in LogTag::all() {
            let flag = format!("--debug-{}", tag.to_debug_key());
            if args.iter().any(|a| *a == flag) {
                config.debug_tags.insert(tag.to_debug_key());
                if config.min_level < LogLevel::Debug {
                    config.min_level = LogLevel::Debug;
                }
            }
        }

        if args.iter().any(|a| a == "--verbose") {
            config.min_level = LogLevel::Verbose;
        }
        if args.iter().any(|a| a == "--quiet") {
            config.min_level = LogLevel::Error;
        }

        let explicit = args
            .iter()
            .position(|a| a == "--log-level")
            .and_then(|i| args.get(i + 1))
            .and_then(|value| LogLevel::from_str(value));
        if let Some(level) = explicit {
            config.min_level = level;
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(_) => LoggerConfig::default(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut current) = LOGGER_CONFIG.write() {
        *current = config;
    }
}

/// Configure the logger from the global argument list
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&get_cmd_args()));
}

pub fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.debug_tags.contains(&tag.to_debug_key())
}
