use crate::api;
use axum::extract::Request;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;

pub struct CalcServer<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CalcServer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// 綁定設定的位址並服務到收到 Ctrl+C 或 SIGTERM
    pub async fn run(&self) -> Result<()> {
        let address = self.config.bind_address();
        tracing::debug!("Binding to {}", address);

        let listener = TcpListener::bind(address.as_str()).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to bind to address {}", address);
            e
        })?;

        tracing::info!(
            "Enhanced calculator microservice running on port {}",
            self.config.port()
        );

        serve_on(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// 在既有的 listener 上服務，`shutdown` 完成時優雅關閉
pub async fn serve_on<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = axum::ServiceExt::<Request>::into_make_service(api::app());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_serve_on_stops_after_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve_on(listener, async move {
            let _ = rx.await;
        }));

        tx.send(()).unwrap();
        let result = handle.await.unwrap();
        assert!(result.is_ok());
    }
}
