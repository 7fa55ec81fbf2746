//! EmoCollab API server binary.
//!
//! Serves the chat history, face analysis and health endpoints until SIGINT
//! or SIGTERM.

use clap::Parser;
use emocollab_api::config::{ApiConfig, DEFAULT_HOST, DEFAULT_PORT};
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "emocollab_api_server", version, about = "EmoCollab API server")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Reject non-numeric user ids on chat lookup with 400 instead of
    /// treating them as user 0.
    #[arg(long, env = "STRICT_USER_ID", default_value_t = false)]
    strict_user_id: bool,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        ApiConfig {
            bind_addr: format!("{}:{}", self.host, self.port),
            strict_user_id: self.strict_user_id,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,emocollab_api=debug,emocollab_core=debug,tower_http=debug",
                )
            }),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        version = emocollab_core::version(),
        bind_addr = %config.bind_addr,
        strict_user_id = config.strict_user_id,
        "starting emocollab_api_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = emocollab_api::router(emocollab_api::AppState::new(config));

    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("emocollab_api_server stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
