/// Log tags identify the subsystem a line comes from
///
/// Each tag maps to a `--debug-<key>` flag that enables its debug output.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Wallet,
    Rpc,
    Sweep,
    Ui,
    Other(String),
}

impl LogTag {
    /// Key used by `--debug-<key>` and `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Wallet => "wallet".to_string(),
            LogTag::Rpc => "rpc".to_string(),
            LogTag::Sweep => "sweep".to_string(),
            LogTag::Ui => "ui".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored label written to log files
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::Other(s) => s.to_uppercase(),
            other => other.to_debug_key().to_uppercase(),
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_keys() {
        assert_eq!(LogTag::Sweep.to_debug_key(), "sweep");
        assert_eq!(LogTag::Rpc.to_plain_string(), "RPC");
        assert_eq!(LogTag::Other("Audit".to_string()).to_debug_key(), "audit");
    }
}
