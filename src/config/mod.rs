//! Configuration system
//!
//! Sections are declared with `config_struct!` in `schemas.rs`, loaded from
//! a TOML file into a global, and read through `with_config`.

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{parse_commitment, Config, RpcConfig, SweepConfig};
pub use utils::{
    get_config_clone, load_config_from_path, parse_wallet_keypair, read_config_file,
    with_config, CONFIG, CONFIG_FILE_PATH,
};
