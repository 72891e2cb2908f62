//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TODO_API_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use rand::RngCore;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::TodoOwnershipPolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const EPHEMERAL_SECRET_BYTES: usize = 32;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("TODO_API_JWT_SECRET must be set in release builds")]
    MissingJwtSecret,
}

/// Server settings.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_API")]
pub struct AppSettings {
    /// Socket address to listen on. Defaults to `0.0.0.0:3000`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it the server keeps data in
    /// memory.
    pub database_url: Option<String>,
    /// HS256 signing secret for bearer tokens.
    pub jwt_secret: Option<String>,
    /// Token lifetime. Tokens never expire when unset.
    pub token_ttl_seconds: Option<u64>,
    /// Restrict to-do updates to the caller's own rows.
    #[ortho_config(default = false)]
    pub enforce_todo_ownership: bool,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("enforce_todo_ownership", &self.enforce_todo_ownership)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

impl AppSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            }
        })
    }

    /// Signing secret. Debug builds fall back to a random per-process secret.
    pub fn jwt_secret(&self) -> Result<Zeroizing<String>, SettingsError> {
        resolve_secret(self.jwt_secret.as_deref(), cfg!(debug_assertions))
    }

    pub fn token_ttl(&self) -> Option<Duration> {
        self.token_ttl_seconds.map(Duration::from_secs)
    }

    pub fn ownership_policy(&self) -> TodoOwnershipPolicy {
        TodoOwnershipPolicy::from_enforced(self.enforce_todo_ownership)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}

fn ephemeral_secret() -> Zeroizing<String> {
    let mut bytes = Zeroizing::new([0_u8; EPHEMERAL_SECRET_BYTES]);
    rand::thread_rng().fill_bytes(bytes.as_mut_slice());
    Zeroizing::new(hex::encode(bytes.as_slice()))
}

fn resolve_secret(
    configured: Option<&str>,
    allow_ephemeral: bool,
) -> Result<Zeroizing<String>, SettingsError> {
    match configured.filter(|secret| !secret.is_empty()) {
        Some(secret) => Ok(Zeroizing::new(secret.to_owned())),
        None if allow_ephemeral => {
            warn!("TODO_API_JWT_SECRET not set; using an ephemeral secret (dev only)");
            Ok(ephemeral_secret())
        }
        None => Err(SettingsError::MissingJwtSecret),
    }
}
