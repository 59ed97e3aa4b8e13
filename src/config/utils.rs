use super::schemas::Config;
/// Configuration utilities - loading, access helpers and wallet key parsing
use crate::logger::{self, LogTag};
use once_cell::sync::OnceCell;
use solana_sdk::signature::Keypair;
use std::path::Path;
use std::sync::RwLock;

/// Global configuration instance
pub static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Read and validate a configuration file without touching the global
///
/// A missing file yields the defaults.
pub fn read_config_file(path: &str) -> Result<Config, String> {
    let config = if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        toml::from_str::<Config>(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))?
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        Config::default()
    };

    config
        .validate()
        .map_err(|e| format!("Invalid config file '{}': {}", path, e))?;

    Ok(config)
}

/// Load configuration from a specific path into the global CONFIG
///
/// Calling it again replaces the loaded configuration.
pub fn load_config_from_path(path: &str) -> Result<(), String> {
    let config = read_config_file(path)?;

    match CONFIG.get() {
        Some(lock) => {
            let mut current = lock
                .write()
                .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
            *current = config;
        }
        None => {
            // A concurrent first load may win the race; replace its value then
            if let Err(lock) = CONFIG.set(RwLock::new(config)) {
                let config = lock
                    .into_inner()
                    .map_err(|e| format!("Config lock poisoned: {}", e))?;
                if let Some(existing) = CONFIG.get() {
                    let mut current = existing
                        .write()
                        .map_err(|e| format!("Failed to acquire config write lock: {}", e))?;
                    *current = config;
                }
            }
        }
    }

    logger::debug(LogTag::Config, &format!("Configuration loaded from '{}'", path));
    Ok(())
}

/// Execute a function with read access to the configuration
///
/// Falls back to defaults when `load_config_from_path` has not run.
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get().map(|lock| lock.read()) {
        Some(Ok(config)) => f(&config),
        _ => f(&Config::default()),
    }
}

/// Get a clone of the entire configuration, for use across await points
pub fn get_config_clone() -> Config {
    with_config(|cfg| cfg.clone())
}

/// Parse the configured wallet key
///
/// Returns `Ok(None)` when no key is configured, which the wallet treats as
/// a disconnected session.
pub fn parse_wallet_keypair(private_key: &str) -> Result<Option<Keypair>, String> {
    let private_key = private_key.trim();

    if private_key.is_empty() {
        return Ok(None);
    }

    let keypair = if private_key.starts_with('[') && private_key.ends_with(']') {
        load_keypair_from_array_format(private_key)?
    } else {
        load_keypair_from_base58_format(private_key)?
    };

    Ok(Some(keypair))
}

/// Parses keys written as "[1,2,3,...]" with 64 byte values
fn load_keypair_from_array_format(private_key_str: &str) -> Result<Keypair, String> {
    let inner = private_key_str.trim_start_matches('[').trim_end_matches(']');

    let bytes = inner
        .split(',')
        .map(|s| s.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|e| format!("Failed to parse private key array: {}", e))?;

    keypair_from_bytes(&bytes)
}

/// Parses keys in the base58 form exported by most Solana wallets
fn load_keypair_from_base58_format(private_key_str: &str) -> Result<Keypair, String> {
    let decoded = bs58::decode(private_key_str)
        .into_vec()
        .map_err(|e| format!("Failed to decode base58 private key: {}", e))?;

    keypair_from_bytes(&decoded)
}

fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair, String> {
    if bytes.len() != 64 {
        return Err(format!(
            "Invalid private key length: expected 64 bytes, got {}",
            bytes.len()
        ));
    }

    Keypair::try_from(bytes).map_err(|e| format!("Failed to create keypair: {}", e))
}
