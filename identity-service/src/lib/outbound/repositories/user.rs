use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::principal::errors::UserStoreError;
use crate::domain::principal::models::EmailAddress;
use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalId;
use crate::domain::principal::models::Role;
use crate::domain::principal::ports::UserStore;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_identity(&self, identity: &str) -> Result<Option<Principal>, UserStoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, role, active, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::DatabaseError(e.to_string()))?;

        row.map(principal_from_row).transpose()
    }

    async fn create(&self, principal: Principal) -> Result<Principal, UserStoreError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, role, active, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(principal.id.0)
        .bind(principal.email.as_str())
        .bind(principal.role.as_str())
        .bind(principal.active)
        .bind(&principal.password_hash)
        .bind(principal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::DuplicateIdentity(
                        principal.email.as_str().to_string(),
                    );
                }
            }
            UserStoreError::DatabaseError(e.to_string())
        })?;

        Ok(principal)
    }

    async fn list_all(&self) -> Result<Vec<Principal>, UserStoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, role, active, password_hash, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserStoreError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(principal_from_row).collect()
    }
}

fn principal_from_row(row: PgRow) -> Result<Principal, UserStoreError> {
    let id: Uuid = column(&row, "id")?;
    let email: String = column(&row, "email")?;
    let role: String = column(&row, "role")?;
    let active: bool = column(&row, "active")?;
    let password_hash: String = column(&row, "password_hash")?;
    let created_at: DateTime<Utc> = column(&row, "created_at")?;

    Ok(Principal {
        id: PrincipalId(id),
        email: EmailAddress::new(email)
            .map_err(|e| UserStoreError::InvalidRecord(e.to_string()))?,
        role: Role::from_str(&role).map_err(|e| UserStoreError::InvalidRecord(e.to_string()))?,
        active,
        password_hash,
        created_at,
    })
}

fn column<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
    row: &'r PgRow,
    name: &str,
) -> Result<T, UserStoreError> {
    row.try_get(name)
        .map_err(|e| UserStoreError::DatabaseError(e.to_string()))
}
