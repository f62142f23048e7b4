use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, expiring access tokens.
///
/// Tokens use the JWS compact serialization with exactly one accepted
/// algorithm: HS256. The `alg` field of an incoming token is never trusted;
/// tokens whose header names any other algorithm (including `none`) fail
/// verification regardless of their signature.
///
/// Validity is fully stateless: a token is authentic iff its signature
/// checks out against the configured secret and its `exp` claim is in the
/// future. Nothing is recorded about issued tokens and there is no
/// revocation.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenCodec {
    /// Create a new codec.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256;
    ///   store it in configuration or a vault, never in code)
    /// * `default_timeout_minutes` - Token lifetime applied when `issue`
    ///   is called without an explicit TTL
    pub fn new(secret: &[u8], default_timeout_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            default_ttl: Duration::minutes(default_timeout_minutes),
        }
    }

    /// Issue a signed access token.
    ///
    /// Builds a claims set from `extra_claims` plus `sub`, `iat`, and an
    /// absolute `exp` computed as now + `ttl` (or now + the configured
    /// default when `ttl` is `None`), then signs it.
    ///
    /// # Errors
    /// * `IssuanceFailed` - Claims serialization or signing failed
    pub fn issue(
        &self,
        subject: &str,
        extra_claims: HashMap<String, serde_json::Value>,
        ttl: Option<Duration>,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiry = now + ttl.unwrap_or(self.default_ttl);

        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: Some(expiry.timestamp()),
            iat: Some(now.timestamp()),
            extra: extra_claims,
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::IssuanceFailed(e.to_string()))
    }

    /// Verify a token and return its decoded claims.
    ///
    /// This is the sole trust boundary: any holder of an unexpired token
    /// signed with the configured secret is treated as authentic.
    ///
    /// # Errors
    /// * `Expired` - The `exp` claim is in the past (zero leeway)
    /// * `Invalid` - Bad signature, malformed token, missing `exp`, or a
    ///   forged algorithm header
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"my_secret_key_at_least_32_bytes_long!", 30)
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();

        let token = codec
            .issue("alice@example.com", HashMap::new(), None)
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = codec.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.subject(), Some("alice@example.com"));
        assert!(claims.exp.is_some());
        assert!(claims.iat.is_some());
    }

    #[test]
    fn test_issue_with_explicit_ttl() {
        let codec = codec();

        let token = codec
            .issue(
                "alice@example.com",
                HashMap::new(),
                Some(Duration::minutes(15)),
            )
            .expect("Failed to issue token");

        let claims = codec.verify(&token).expect("Failed to verify token");
        let exp = claims.exp.unwrap();
        let iat = claims.iat.unwrap();
        assert_eq!(exp - iat, 15 * 60);
    }

    #[test]
    fn test_issue_merges_extra_claims() {
        let codec = codec();

        let mut extra = HashMap::new();
        extra.insert("role".to_string(), serde_json::json!("admin"));

        let token = codec
            .issue("alice@example.com", extra, None)
            .expect("Failed to issue token");

        let claims = codec.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.role(), Some("admin"));
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = codec();

        let token = codec
            .issue(
                "alice@example.com",
                HashMap::new(),
                Some(Duration::seconds(-60)),
            )
            .expect("Failed to issue token");

        let result = codec.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec1 = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!", 30);
        let codec2 = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!", 30);

        let token = codec1
            .issue("alice@example.com", HashMap::new(), None)
            .expect("Failed to issue token");

        let result = codec2.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_malformed_token() {
        let result = codec().verify("not.a.token");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_rejects_none_algorithm() {
        // Unsigned token: header {"alg":"none","typ":"JWT"}, unexpired
        // claims, empty signature segment.
        let forged = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.\
                      eyJzdWIiOiJhbGljZUBleGFtcGxlLmNvbSIsImV4cCI6OTk5OTk5OTk5OX0.";

        let result = codec().verify(forged);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_rejects_other_hmac_algorithm() {
        // Sign with the right secret but the wrong algorithm. The codec
        // must reject based on its own algorithm list, not the header.
        let secret = b"my_secret_key_at_least_32_bytes_long!";
        let claims = Claims {
            sub: Some("alice@example.com".to_string()),
            exp: Some(Utc::now().timestamp() + 600),
            ..Claims::new()
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .expect("Failed to sign HS384 token");

        let result = TokenCodec::new(secret, 30).verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_requires_exp_claim() {
        // A signed token without `exp` would never expire; verification
        // must refuse it.
        let secret = b"my_secret_key_at_least_32_bytes_long!";
        let claims = Claims {
            sub: Some("alice@example.com".to_string()),
            ..Claims::new()
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .expect("Failed to sign token");

        let result = TokenCodec::new(secret, 30).verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}
