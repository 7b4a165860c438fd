// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Nostr NIP-05 Server - Static Identity Responder
//!
//! Answers `GET /.well-known/nostr.json?name=<name>` from an identity table
//! loaded once at startup from a JSON file.
//!
//! ## Modules
//!
//! - `api` - HTTP handlers and router (Axum)
//! - `config` - Configuration file model and loading
//! - `models` - Identity records and the well-known document
//! - `server` - Listener binding and graceful shutdown
//! - `telemetry` - Tracing subscriber setup

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod state;
pub mod telemetry;
