pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ServerConfig, TomlConfig};
pub use crate::core::{parse::parse_number, server::CalcServer};
pub use domain::model::{Operation, OperationResult};
pub use utils::error::{CalcError, Result};
