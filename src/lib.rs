// Core modules
pub mod cli;
pub mod config;
pub mod json;

// Re-export commonly used types
pub use config::{CodecConfig, Config, DecodeConfig, LogConfig};
pub use json::{item_to_json, value_from_json, JsonError};

// Re-export crate modules
pub use ethereum_rlp as rlp;
pub use ethereum_types as types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get tool version string
pub fn client_version() -> String {
    format!("ethereum-rlp/v{}/rust", VERSION)
}
