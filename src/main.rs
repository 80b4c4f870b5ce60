use anyhow::Context;
use calc_service::domain::ports::ConfigProvider;
use calc_service::utils::{logger, validation::Validate};
use calc_service::{CalcServer, CliConfig, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 合併命令列、環境變數與設定檔
    let config = ServerConfig::resolve(cli).context("failed to load configuration")?;

    logger::init_logger(config.log_format(), config.verbose);

    tracing::info!("Starting calc-service");
    tracing::debug!("Server config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e).context("invalid configuration");
    }

    let server = CalcServer::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        return Err(e).context("server terminated with an error");
    }

    Ok(())
}
