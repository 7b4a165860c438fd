// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! The identity table and listen port come from a JSON file named on the
//! command line. It is read once at startup and never reloaded.
//!
//! ```json
//! {
//!   "port": 8080,
//!   "names": {
//!     "alice": { "pubkey": "abc123", "relays": ["wss://r1", "wss://r2"] },
//!     "bob": { "pubkey": "def456" }
//!   }
//! }
//! ```
//!
//! `relays` may be missing or `null`, and so may `names`. A record without a
//! `pubkey`, or a missing `port`, is rejected at startup.
//!
//! ## Environment Variables
//!
//! Only log output is shaped by the environment:
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{
    collections::HashMap,
    fs,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::models::{null_as_default, IdentityRecord};

/// Path used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity table plus listen port.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    #[serde(default, deserialize_with = "null_as_default")]
    pub names: HashMap<String, IdentityRecord>,
}

impl Config {
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Exact, case-sensitive lookup. The empty name never resolves.
    pub fn lookup(&self, name: &str) -> Option<&IdentityRecord> {
        if name.is_empty() {
            return None;
        }
        self.names.get(name)
    }

    /// Listen on every interface at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
