use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::principal::errors::UserStoreError;
use crate::domain::principal::models::Principal;
use crate::domain::principal::ports::UserStore;

/// In-memory user store keyed by identity.
///
/// Used for local development and integration tests, where spinning up a
/// database is overkill. Not suitable for more than one process.
#[derive(Default)]
pub struct InMemoryUserStore {
    principals: RwLock<HashMap<String, Principal>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_identity(&self, identity: &str) -> Result<Option<Principal>, UserStoreError> {
        let principals = self.principals.read().await;
        Ok(principals.get(identity).cloned())
    }

    async fn create(&self, principal: Principal) -> Result<Principal, UserStoreError> {
        let mut principals = self.principals.write().await;
        let identity = principal.email.as_str().to_string();

        if principals.contains_key(&identity) {
            return Err(UserStoreError::DuplicateIdentity(identity));
        }

        principals.insert(identity, principal.clone());
        Ok(principal)
    }

    async fn list_all(&self) -> Result<Vec<Principal>, UserStoreError> {
        let principals = self.principals.read().await;
        let mut all: Vec<Principal> = principals.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::principal::models::EmailAddress;
    use crate::domain::principal::models::PrincipalId;
    use crate::domain::principal::models::Role;

    fn principal(email: &str) -> Principal {
        Principal {
            id: PrincipalId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            role: Role::User,
            active: true,
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemoryUserStore::new();

        store.create(principal("alice@example.com")).await.unwrap();

        let found = store.find_by_identity("alice@example.com").await.unwrap();
        assert!(found.is_some());

        let missing = store.find_by_identity("bob@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_identity() {
        let store = InMemoryUserStore::new();

        store.create(principal("alice@example.com")).await.unwrap();
        let result = store.create(principal("alice@example.com")).await;

        assert!(matches!(
            result,
            Err(UserStoreError::DuplicateIdentity(_))
        ));
    }

    #[tokio::test]
    async fn test_list_all() {
        let store = InMemoryUserStore::new();

        store.create(principal("alice@example.com")).await.unwrap();
        store.create(principal("bob@example.com")).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
