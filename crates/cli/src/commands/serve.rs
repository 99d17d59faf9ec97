use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use waitlist_core::WaitlistConfig;
use waitlist_http::{AppState, create_router};
use waitlist_storage::StorageBackend;

pub(crate) async fn run(config: &WaitlistConfig, host: &str, port: u16) -> Result<()> {
    let storage = StorageBackend::from_database_url(config.database_url.as_deref())
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(
        backend = storage.kind(),
        project = %config.project_name,
        cooldown = ?config.submit_cooldown,
        trust_forwarded_for = config.trust_forwarded_for,
        "storage ready"
    );

    let state = Arc::new(AppState::new(storage, config));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
