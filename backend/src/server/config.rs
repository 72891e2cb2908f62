//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use backend::domain::TodoOwnershipPolicy;
use backend::outbound::persistence::DbPool;
use backend::outbound::security::BCRYPT_COST;
use zeroize::Zeroizing;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) jwt_secret: Zeroizing<String>,
    pub(crate) token_ttl: Option<Duration>,
    pub(crate) ownership: TodoOwnershipPolicy,
    pub(crate) bcrypt_cost: u32,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration with non-expiring tokens, unchecked update ownership and
    /// the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, jwt_secret: Zeroizing<String>) -> Self {
        Self {
            bind_addr,
            jwt_secret,
            token_ttl: None,
            ownership: TodoOwnershipPolicy::default(),
            bcrypt_cost: BCRYPT_COST,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; repositories switch to Diesel.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_token_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.token_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_ownership(mut self, ownership: TodoOwnershipPolicy) -> Self {
        self.ownership = ownership;
        self
    }

    /// Override the bcrypt work factor. Tests lower it to keep runs fast.
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
