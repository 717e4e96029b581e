//! User lookup
//!
//! The collaborator that maps a canonical identity to a user record.
//! Storage and querying live behind this seam; the crate only consumes it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Lookup errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A resolved user record.
///
/// `attributes` carries whatever the backing store knows about the user
/// (display name, mail, group memberships) as free-form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl UserRecord {
    /// Create a record with no extra attributes
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            attributes: HashMap::new(),
        }
    }
}

/// User lookup trait
///
/// `Ok(None)` means the identity matched no user; `Err` means the
/// collaborator itself failed and is propagated unchanged.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find the user record for a canonical identity
    async fn find_by_identity(&self, identity: &str) -> Result<Option<UserRecord>, LookupError>;
}

/// Map-backed lookup for tests and embedding hosts without a user store.
///
/// # Example
///
/// ```
/// use torii_envauth::lookup::{MemoryUserLookup, UserRecord};
///
/// let lookup = MemoryUserLookup::new().with_user(UserRecord::new("alice"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryUserLookup {
    users: HashMap<String, UserRecord>,
}

impl MemoryUserLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, keyed by its username
    #[must_use]
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.insert(user.username.clone(), user);
        self
    }
}

#[async_trait]
impl UserLookup for MemoryUserLookup {
    async fn find_by_identity(&self, identity: &str) -> Result<Option<UserRecord>, LookupError> {
        Ok(self.users.get(identity).cloned())
    }
}
