//! Torii EnvAuth Library
//!
//! Trusted-environment authentication strategy with identity normalization.
//!
//! Authenticates requests from an environment variable (typically
//! `REMOTE_USER`) populated by an upstream trusted component such as a
//! reverse proxy or SSO gateway, then resolves the canonical identity
//! through a pluggable user lookup.
//!
//! # Features
//!
//! - **Stateless**: every request is evaluated independently, no sessions
//! - **Identity Normalization**: ASCII lower-casing and scope stripping
//!   (`bob@example.com` -> `bob`)
//! - **Pluggable Lookup**: bring your own user store behind `UserLookup`
//! - **YAML Configuration**: with `${VAR}` environment expansion
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use torii_envauth::auth::env::EnvAuthenticator;
//! use torii_envauth::lookup::{MemoryUserLookup, UserRecord};
//! use torii_envauth::{AuthRequest, Authenticator, EnvAuthConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), torii_envauth::AuthError> {
//!     let lookup = MemoryUserLookup::new().with_user(UserRecord::new("alice"));
//!     let auth = EnvAuthenticator::new(EnvAuthConfig::default(), Arc::new(lookup));
//!
//!     let mut request = AuthRequest::default();
//!     request.env.insert("REMOTE_USER".into(), "alice".into());
//!
//!     let result = auth.authenticate(&request).await?;
//!     assert_eq!(result.subject, "alice");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod identity;
pub mod lookup;

// Re-export commonly used types
pub use auth::{AuthError, AuthRequest, AuthResult, Authenticator};
pub use config::EnvAuthConfig;
pub use identity::{DropScope, IdentityNormalizer};
pub use lookup::{UserLookup, UserRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
