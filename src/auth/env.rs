//! Trusted-Environment Authentication
//!
//! Authenticates against an environment variable set by an upstream
//! trusted component (reverse proxy, SSO gateway, basic-auth frontend).
//! The value is canonicalized and then resolved through the configured
//! user lookup.

use super::{AuthError, AuthRequest, AuthResult, Authenticator};
use crate::config::EnvAuthConfig;
use crate::identity::IdentityNormalizer;
use crate::lookup::UserLookup;
use async_trait::async_trait;
use std::sync::Arc;

/// Environment-variable authenticator
///
/// Stateless per request; every request is evaluated independently, so no
/// login action or session is involved.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use torii_envauth::auth::env::EnvAuthenticator;
/// use torii_envauth::config::EnvAuthConfig;
/// use torii_envauth::lookup::{MemoryUserLookup, UserRecord};
///
/// let lookup = MemoryUserLookup::new().with_user(UserRecord::new("alice"));
/// let auth = EnvAuthenticator::new(EnvAuthConfig::default(), Arc::new(lookup));
/// ```
pub struct EnvAuthenticator {
    config: EnvAuthConfig,
    normalizer: IdentityNormalizer,
    lookup: Arc<dyn UserLookup>,
}

impl EnvAuthenticator {
    /// Create an authenticator from configuration and a user lookup
    pub fn new(config: EnvAuthConfig, lookup: Arc<dyn UserLookup>) -> Self {
        let normalizer =
            IdentityNormalizer::new(config.force_lowercase, config.drop_scope.clone());
        Self {
            config,
            normalizer,
            lookup,
        }
    }

    /// Canonical identity for a request, if it carries one
    fn extract_identity(&self, request: &AuthRequest) -> Option<String> {
        self.normalizer
            .normalize(request.env_value(&self.config.variable_name))
    }
}

#[async_trait]
impl Authenticator for EnvAuthenticator {
    #[tracing::instrument(
        name = "auth.env",
        skip(self, request),
        fields(
            auth.method = "env",
            auth.variable = %self.config.variable_name,
        ),
        err
    )]
    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResult, AuthError> {
        let subject = match self.extract_identity(request) {
            Some(subject) => subject,
            None => {
                tracing::debug!("no usable identity in request environment");
                return Err(AuthError::MissingIdentity);
            }
        };

        let user = self
            .lookup
            .find_by_identity(&subject)
            .await?
            .ok_or_else(|| AuthError::UnknownUser(subject.clone()))?;

        tracing::info!(
            subject = %subject,
            "environment authentication successful"
        );

        Ok(AuthResult { subject, user })
    }
}
