// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! NIP-05 well-known endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, models::WellKnownResponse, state::AppState};

pub const WELL_KNOWN_PATH: &str = "/.well-known/nostr.json";

/// First value of `key` in the decoded query, matching the usual form
/// semantics when a parameter repeats.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Resolve a name to its public key and relays.
///
/// A missing, empty or unknown name all produce the same 400 response.
#[utoipa::path(
    get,
    path = "/.well-known/nostr.json",
    params(
        ("name" = String, Query, description = "Local part of the identifier to resolve")
    ),
    tag = "NIP-05",
    responses(
        (status = 200, description = "Name resolved", body = WellKnownResponse, content_type = "application/json"),
        (status = 400, description = "Missing or unknown name", body = String, content_type = "text/plain"),
        (status = 500, description = "Response could not be encoded", body = String, content_type = "text/plain")
    )
)]
pub async fn well_known(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Undecodable query string");
            return Err(ApiError::invalid_user());
        }
    };

    let Some(name) = first_param(&params, "name").filter(|name| !name.is_empty()) else {
        tracing::debug!("Request without a name parameter");
        return Err(ApiError::invalid_user());
    };

    let Some(record) = state.config.lookup(name) else {
        tracing::debug!(name, "Unknown name");
        return Err(ApiError::invalid_user());
    };

    let body = serde_json::to_vec(&WellKnownResponse::for_record(name, record))
        .map_err(|e| ApiError::internal(format!("failed to JSON marshal response: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
