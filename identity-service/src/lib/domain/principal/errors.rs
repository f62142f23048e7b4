use thiserror::Error;

/// Error for PrincipalId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrincipalIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for user store operations
#[derive(Debug, Clone, Error)]
pub enum UserStoreError {
    #[error("Identity already registered: {0}")]
    DuplicateIdentity(String),

    #[error("Stored record is invalid: {0}")]
    InvalidRecord(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// External authentication/authorization error.
///
/// Every token or lookup failure below the resolver boundary is normalized
/// to `Unauthorized`: bad signature, expired token, missing subject, and
/// unknown user are externally indistinguishable so callers cannot probe
/// which one occurred. `Forbidden` is raised only by the admin guard, after
/// successful resolution. `Unavailable` is reserved for user store
/// infrastructure failure, kept separate from bad credentials so outages
/// do not masquerade as auth failures in logs and metrics.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Could not validate credentials")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("User lookup unavailable")]
    Unavailable,
}
