use async_trait::async_trait;

use super::errors::UserStoreError;
use super::models::Principal;

/// Persistence port for principals.
///
/// The resolver only needs `find_by_identity`; the remaining operations
/// back registration and the admin listing endpoint. Lookups may suspend
/// and must be safe to cancel (no partial state to roll back).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve a principal by identity (email address).
    ///
    /// # Returns
    /// Optional principal (None if no identity matches)
    ///
    /// # Errors
    /// * `InvalidRecord` - Stored row could not be mapped to a principal
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_identity(&self, identity: &str) -> Result<Option<Principal>, UserStoreError>;

    /// Persist a new principal.
    ///
    /// # Returns
    /// Created principal
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, principal: Principal) -> Result<Principal, UserStoreError>;

    /// Retrieve all principals.
    ///
    /// # Errors
    /// * `InvalidRecord` - A stored row could not be mapped to a principal
    /// * `DatabaseError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<Principal>, UserStoreError>;
}
