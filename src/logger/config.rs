/// Logger configuration derived from command-line flags
///
/// Stored in a global so every `logger::*` call can filter without
/// threading state through the call chain.
use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Most detailed level that is displayed
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` set
    pub debug_tags: HashSet<String>,
    /// Tags with `--verbose-<tag>` set
    pub verbose_tags: HashSet<String>,
    /// Optional file that receives plain copies of every line
    pub log_file: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            log_file: None,
        }
    }
}

impl LoggerConfig {
    /// Build a configuration from an argument list
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LoggerConfig::default();

        for (i, arg) in args.iter().enumerate() {
            if arg == "--verbose" {
                config.min_level = LogLevel::Verbose;
            } else if arg == "--quiet" {
                config.min_level = LogLevel::Warning;
            } else if arg == "--log-file" {
                config.log_file = args.get(i + 1).cloned();
            } else if let Some(key) = arg.strip_prefix("--debug-") {
                config.debug_tags.insert(key.to_lowercase());
            } else if let Some(key) = arg.strip_prefix("--verbose-") {
                config.verbose_tags.insert(key.to_lowercase());
            }
        }

        // Debug lines need the threshold to let them through
        if !config.debug_tags.is_empty() && config.min_level < LogLevel::Debug {
            config.min_level = LogLevel::Debug;
        }

        config
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Initialize the logger configuration from the global argument store
pub fn init_from_args() {
    set_logger_config(LoggerConfig::from_args(&crate::arguments::get_cmd_args()));
}

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

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    let config = get_logger_config();
    config.debug_tags.contains(&tag.to_debug_key()) || config.debug_tags.contains("all")
}

pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config().verbose_tags.contains(&tag.to_debug_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_info() {
        let config = LoggerConfig::from_args(&args(&["wallet_sweeper"]));
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_debug_flags_raise_threshold() {
        let config = LoggerConfig::from_args(&args(&[
            "wallet_sweeper",
            "--debug-sweep",
            "--debug-RPC",
            "--log-file",
            "sweep.log",
        ]));
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.debug_tags.contains("sweep"));
        assert!(config.debug_tags.contains("rpc"));
        assert_eq!(config.log_file.as_deref(), Some("sweep.log"));
    }

    #[test]
    fn test_quiet_keeps_warnings() {
        let config = LoggerConfig::from_args(&args(&["wallet_sweeper", "--quiet"]));
        assert_eq!(config.min_level, LogLevel::Warning);
    }
}
