//! Authentication module
//!
//! Defines the strategy seam and the trusted-environment strategy.

use crate::lookup::{LookupError, UserRecord};
use async_trait::async_trait;
use thiserror::Error;

pub mod env;

/// Authentication errors
///
/// `MissingIdentity` and `UnknownUser` are both "unauthenticated" to the
/// host; how to reject (redirect vs. hard 401) is the host's policy.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing identity")]
    MissingIdentity,

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Authentication result
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Canonical identity the lookup was performed with
    pub subject: String,
    pub user: UserRecord,
}

/// Authentication request context
///
/// `env` is the server-populated environment of the request. Entries are
/// trusted to come from the upstream proxy/server, not the client.
#[derive(Debug, Default)]
pub struct AuthRequest {
    pub env: std::collections::HashMap<String, String>,
    pub method: String,
    pub path: String,
}

impl AuthRequest {
    /// Value of one environment entry, if present
    pub fn env_value(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }
}

/// Authenticator trait
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate a request
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResult, AuthError>;
}
