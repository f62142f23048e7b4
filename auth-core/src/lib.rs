//! Core authentication primitives
//!
//! Reusable, I/O-free building blocks for bearer-token authentication:
//! - Password hashing and verification (Argon2id)
//! - Signed, expiring access tokens (JWS compact serialization, HS256 only)
//!
//! The hosting service owns user storage and HTTP wiring; this crate only
//! covers the security-relevant computations. Both components are plain
//! values constructed once at startup and shared by reference, so tests can
//! run each with its own secret.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use std::collections::HashMap;
//! use auth_core::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", 30);
//! let token = codec.issue("alice@example.com", HashMap::new(), None).unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.subject(), Some("alice@example.com"));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
