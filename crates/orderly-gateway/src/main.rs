//! orderly gateway binary.
//!
//! - Config: `$ORDERLY_CONFIG` or `orderly.yaml` (defaults when absent)
//! - Logging: `RUST_LOG` via `EnvFilter`
//! - Ctrl-C: flip readiness to draining, wait the grace period, stop

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use orderly_core::error::{OrderlyError, Result};
use orderly_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "orderly-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;
    let grace = cfg.server.shutdown_grace();

    let state = AppState::new(cfg)?;
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "orderly-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| OrderlyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state, grace))
        .await
        .map_err(|e| OrderlyError::Internal(format!("server failed: {e}")))?;

    tracing::info!("orderly-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState, grace: std::time::Duration) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl_c handler failed; shutting down");
    }
    state.set_draining();
    tracing::info!(grace_ms = grace.as_millis() as u64, "draining");
    tokio::time::sleep(grace).await;
}
