// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Identity Data Models
//!
//! This module defines the records loaded from the configuration file and the
//! document served from `/.well-known/nostr.json`.
//!
//! ## Model Categories
//!
//! - **Identity records**: a public key plus the relays it can be reached on
//! - **Well-known response**: the NIP-05 document for a single queried name

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Identity Record
// =============================================================================

/// A configured identity: the public key a name resolves to and, optionally,
/// the relays where that key publishes.
///
/// Records are immutable once the configuration has been loaded.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Public key, passed through exactly as configured.
    pub pubkey: String,
    /// Relay URLs in configured order. Absent or `null` in the file means
    /// empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub relays: Vec<String>,
}

/// Treat an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl IdentityRecord {
    #[cfg(test)]
    pub fn new(pubkey: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            relays: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_relays<I, S>(mut self, relays: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relays = relays.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_relays(&self) -> bool {
        !self.relays.is_empty()
    }
}

// =============================================================================
// Well-Known Response
// =============================================================================

/// The `/.well-known/nostr.json` document for one resolved name.
///
/// `names` always holds exactly one entry. `relays` is keyed by the public key
/// and is omitted from the JSON entirely when the record has no relays.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct WellKnownResponse {
    /// Queried name mapped to its public key.
    pub names: BTreeMap<String, String>,
    /// Public key mapped to its relay URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relays: Option<BTreeMap<String, Vec<String>>>,
}

impl WellKnownResponse {
    /// Build the document for `name` resolved to `record`.
    pub fn for_record(name: &str, record: &IdentityRecord) -> Self {
        let names = BTreeMap::from([(name.to_string(), record.pubkey.clone())]);

        let relays = record
            .has_relays()
            .then(|| BTreeMap::from([(record.pubkey.clone(), record.relays.clone())]));

        Self { names, relays }
    }
}
