pub mod arguments;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logger;
pub mod rpc;
pub mod sweep;
pub mod ui;
pub mod wallet;
