/// Filtering rules and dispatch to the formatter
use super::config::{get_logger_config, is_debug_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// 1. Errors are always shown
/// 2. Anything above the minimum level is dropped
/// 3. Debug additionally requires `--debug-<tag>` for that tag
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        return false;
    }

    if level == LogLevel::Debug && config.min_level < LogLevel::Verbose {
        return is_debug_enabled_for_tag(config, tag);
    }

    true
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&get_logger_config(), &tag, level) {
        return;
    }

    super::format::format_and_log(tag, level, message);
}
