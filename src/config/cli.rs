use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// 命令列參數；未指定的值由 TOML 檔或預設值補上
#[derive(Debug, Clone, Parser)]
#[command(name = "calc-service")]
#[command(about = "A small calculator microservice")]
pub struct CliConfig {
    #[arg(long, env = "HOST", help = "Address to bind [default: 0.0.0.0]")]
    pub host: Option<String>,

    #[arg(long, env = "PORT", help = "Port to listen on [default: 3000]")]
    pub port: Option<u16>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Log output format [default: compact]")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
