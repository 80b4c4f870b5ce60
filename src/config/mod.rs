#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// 合併後的最終設定，啟動時讀取一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl ServerConfig {
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: file.server.host.unwrap_or(defaults.host),
            port: file.server.port.unwrap_or(defaults.port),
            log_format: file.logging.format.unwrap_or(defaults.log_format),
            verbose: file.logging.verbose.unwrap_or(defaults.verbose),
        }
    }

    /// 命令列與環境變數 > TOML 檔 > 預設值
    #[cfg(feature = "cli")]
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let base = Self::from_toml(file);

        Ok(Self {
            host: cli.host.unwrap_or(base.host),
            port: cli.port.unwrap_or(base.port),
            log_format: cli.log_format.unwrap_or(base.log_format),
            verbose: cli.verbose || base.verbose,
        })
    }
}

impl ConfigProvider for ServerConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
