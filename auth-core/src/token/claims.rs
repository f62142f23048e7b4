use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Standard RFC 7519 fields plus arbitrary custom claims via the flattened
/// `extra` map. `sub` and `exp` are optional at the type level so that
/// verification (not deserialization) decides what is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Subject (principal identity, e.g. an email address)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp, seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom claims (flattened into the token payload)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subject claim, if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// `role` custom claim, if present (convenience accessor).
    pub fn role(&self) -> Option<&str> {
        self.extra.get("role").and_then(|v| v.as_str())
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}
