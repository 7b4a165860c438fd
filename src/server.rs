// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Listener binding and the serve loop.

use std::path::Path;

use tokio::net::TcpListener;

use crate::{api::router, config::Config, error::StartupError, state::AppState};

/// Load the configuration, bind its port and serve until a shutdown signal.
pub async fn run(config_path: &Path) -> Result<(), StartupError> {
    let config = Config::load(config_path)?;
    tracing::info!(
        path = %config_path.display(),
        names = config.names.len(),
        "Loaded configuration"
    );

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    serve(listener, AppState::new(config)).await
}

/// Serve on an already bound listener. In-flight requests finish before this
/// returns.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), StartupError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "NIP-05 server listening (docs at /docs)");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::warn!("Shutdown signal received, draining connections");
}
