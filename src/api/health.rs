// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Readiness response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall status, always "ok" once the server is accepting requests.
    pub status: String,
    /// Individual checks and their results.
    pub checks: HealthChecks,
}

/// Individual readiness check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Number of names in the loaded configuration.
    pub names: usize,
}

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe handler.
///
/// The configuration is loaded before the listener binds, so a running
/// server is always ready. Reports the size of the identity table.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ok".to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            names: state.config.names.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, models::IdentityRecord};

    #[tokio::test]
    async fn liveness_is_ok() {
        let Json(response) = liveness().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn readiness_counts_names() {
        let mut config = Config::from_json(r#"{"port": 8080}"#).unwrap();
        config
            .names
            .insert("alice".into(), IdentityRecord::new("abc123"));

        let Json(response) = readiness(State(AppState::new(config))).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.checks.service, "ok");
        assert_eq!(response.checks.names, 1);
    }
}
