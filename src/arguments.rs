/// Centralized argument handling for the sweeper
///
/// Arguments are stored once in a global so that the logger, the config
/// loader and the binary all read the same flags. Tests override them with
/// `set_cmd_args`.
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
        // Poisoned mutex, fall back to the process arguments
        Err(_) => env::args().collect(),
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// MODE FLAGS
// =============================================================================

/// Assemble and print the sweep without signing anything
pub fn is_dry_run_enabled() -> bool {
    has_arg("--dry-run")
}

/// Approve signing without the terminal prompt
pub fn is_auto_approve_enabled() -> bool {
    has_arg("--yes") || has_arg("-y")
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

/// Config file path override
pub fn get_config_path() -> Option<String> {
    get_arg_value("--config")
}

/// Recipient given on the command line (single non-interactive attempt)
pub fn get_recipient_arg() -> Option<String> {
    get_arg_value("--recipient")
}

// =============================================================================
// DEBUG FLAGS
// =============================================================================

/// Returns the list of `--debug-<module>` suffixes present on the command line
pub fn get_enabled_debug_modes() -> Vec<String> {
    get_cmd_args()
        .iter()
        .filter_map(|a| a.strip_prefix("--debug-"))
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
        .collect()
}

pub fn is_any_debug_enabled() -> bool {
    !get_enabled_debug_modes().is_empty()
}

pub fn print_help() {
    println!("wallet_sweeper - sweep SOL and SPL tokens to one recipient");
    println!();
    println!("USAGE:");
    println!("    wallet_sweeper [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>       Config file (default: data/config.toml)");
    println!("    --recipient <addr>    Sweep once to this address and exit");
    println!("    --dry-run             Assemble the transaction without signing");
    println!("    --yes, -y             Sign without the approval prompt");
    println!("    --log-file <path>     Also append log lines to a file");
    println!("    --debug-<module>      Debug logs for: system, config, wallet, rpc, sweep, ui");
    println!("    --verbose             Show verbose logs");
    println!("    --quiet               Only show warnings and errors");
    println!("    --help, -h            Print this help");
}

#[cfg(test)]
mod tests {
    use super::*;

    // All argument assertions share the global store, so they run in one test.
    #[test]
    fn test_argument_store() {
        set_cmd_args(vec![
            "wallet_sweeper".to_string(),
            "--debug-sweep".to_string(),
            "--recipient".to_string(),
            "3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX".to_string(),
            "--dry-run".to_string(),
        ]);

        assert!(has_arg("--debug-sweep"));
        assert!(!has_arg("--debug-rpc"));
        assert!(is_dry_run_enabled());
        assert!(!is_auto_approve_enabled());
        assert_eq!(
            get_recipient_arg(),
            Some("3KBJ2uHxtm3ZTEoBUad8MPbDQcUGeUwzAm7aqm5ehTBX".to_string())
        );
        assert_eq!(get_config_path(), None);
        assert_eq!(get_enabled_debug_modes(), vec!["sweep".to_string()]);
        assert!(is_any_debug_enabled());

        set_cmd_args(vec!["wallet_sweeper".to_string(), "--recipient".to_string()]);
        assert_eq!(get_recipient_arg(), None);
        assert!(!is_any_debug_enabled());
    }
}
