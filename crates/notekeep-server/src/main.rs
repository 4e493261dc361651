//! notekeep server
//!
//! - Note API: /notes, /notes/:index, HTML view at /
//! - Ops: /healthz, /readyz, /metrics
//! - Graceful shutdown: readyz flips to draining, then in-flight requests finish

use notekeep_core::error::{NoteError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notekeep_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "notekeep-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let explicit = std::env::var(config::CONFIG_ENV).ok();
    let cfg = config::load(explicit.as_deref())?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "notekeep-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| NoteError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| NoteError::Internal(format!("server failed: {e}")))?;

    tracing::info!("notekeep-server stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.metrics().set_draining();
    tracing::info!(notes = state.store().len(), "signal received, draining");
}
