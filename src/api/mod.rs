// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{models::WellKnownResponse, state::AppState};

pub mod health;
pub mod nip05;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(nip05::WELL_KNOWN_PATH, get(nip05::well_known))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    // Browser clients need `Access-Control-Allow-Origin: *` on every response.
    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(nip05::well_known, health::liveness, health::readiness),
    components(
        schemas(
            WellKnownResponse,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "NIP-05", description = "Name to public key resolution"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
