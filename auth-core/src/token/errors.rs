use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures carry a reason for internal logging; callers at
/// the service boundary collapse all variants into a single external
/// "unauthorized" error so the reason never reaches the client.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssuanceFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}
