use std::sync::Arc;

use auth_core::TokenCodec;

use super::errors::AuthError;
use super::models::Principal;
use super::ports::UserStore;

/// Resolves a bearer token to the principal it was issued for.
///
/// Composes the token codec with the user store: verify signature and
/// expiry, extract the subject claim, load the matching principal. The
/// store lookup is the resolver's single point of I/O.
///
/// Every failure on the way — bad signature, expired token, missing
/// subject, unknown user — is normalized to `AuthError::Unauthorized`.
/// The distinction is logged internally but never reaches the caller.
pub struct PrincipalResolver {
    codec: Arc<TokenCodec>,
    store: Arc<dyn UserStore>,
}

impl PrincipalResolver {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn UserStore>) -> Self {
        Self { codec, store }
    }

    /// Resolve a bearer token to its principal.
    ///
    /// # Arguments
    /// * `token` - Raw token string as presented in the Authorization header
    ///
    /// # Errors
    /// * `Unauthorized` - Token invalid/expired, subject missing, or no
    ///   principal matches the subject
    /// * `Unavailable` - User store lookup failed
    pub async fn resolve(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self.codec.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            AuthError::Unauthorized
        })?;

        let subject = claims.subject().ok_or_else(|| {
            tracing::warn!("Token accepted but has no subject claim");
            AuthError::Unauthorized
        })?;

        let principal = self
            .store
            .find_by_identity(subject)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User store lookup failed");
                AuthError::Unavailable
            })?
            .ok_or(AuthError::Unauthorized)?;

        Ok(principal)
    }
}
