use std::collections::HashMap;
use std::sync::Arc;

use auth_core::PasswordHasher;
use auth_core::TokenCodec;
use chrono::Duration;
use chrono::Utc;
use identity_service::domain::principal::models::EmailAddress;
use identity_service::domain::principal::models::Principal;
use identity_service::domain::principal::models::PrincipalId;
use identity_service::domain::principal::models::Role;
use identity_service::domain::principal::ports::UserStore;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserStore;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port, backed by
/// the in-memory user store.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Codec configured with the server's secret, for minting test tokens.
    pub codec: TokenCodec,
    store: Arc<InMemoryUserStore>,
    hasher: PasswordHasher,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryUserStore::new());
        let token_codec = Arc::new(TokenCodec::new(TEST_SECRET, 30));

        let router = create_router(
            Arc::clone(&store) as Arc<dyn UserStore>,
            Arc::clone(&token_codec),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            codec: TokenCodec::new(TEST_SECRET, 30),
            store,
            hasher: PasswordHasher::new(),
        }
    }

    /// Seed a principal directly into the store.
    pub async fn seed_user(&self, email: &str, password: &str, role: Role) -> Principal {
        let principal = Principal {
            id: PrincipalId::new(),
            email: EmailAddress::new(email.to_string()).expect("valid test email"),
            role,
            active: true,
            password_hash: self.hasher.hash(password).expect("Failed to hash password"),
            created_at: Utc::now(),
        };

        self.store
            .create(principal)
            .await
            .expect("Failed to seed user")
    }

    /// Mint a token signed with the server's secret.
    pub fn issue_token(&self, subject: &str, role: &str, ttl: Option<Duration>) -> String {
        let mut extra = HashMap::new();
        extra.insert("role".to_string(), serde_json::json!(role));

        self.codec
            .issue(subject, extra, ttl)
            .expect("Failed to issue test token")
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
