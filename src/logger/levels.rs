/// Log level definitions
///
/// Ordered by detail (Error < Warning < Info < Debug < Verbose) so a single
/// threshold comparison filters them.
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Verbose = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Verbose => "VERBOSE",
        }
    }

    /// Colored, fixed-width label for console output
    pub fn colored_label(&self, width: usize) -> ColoredString {
        let label = format!("{:<width$}", self.as_str(), width = width);
        match self {
            LogLevel::Error => label.bright_red().bold(),
            LogLevel::Warning => label.yellow().bold(),
            LogLevel::Info => label.white().bold(),
            LogLevel::Debug => label.purple(),
            LogLevel::Verbose => label.dimmed(),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Verbose > LogLevel::Debug);
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
    }
}
