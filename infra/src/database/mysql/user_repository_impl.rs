//! MySQL implementation of the UserRepository trait.
//!
//! Accounts live in the `users` table; the identity filter becomes
//! `(id = ? OR <contact match>) AND permissions = ?`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use ma_core::domain::entities::user::{AccountStatus, NewUser, Permission, User};
use ma_core::errors::{AuthError, DomainError};
use ma_core::repositories::{IdentityFilter, UserRepository};

use crate::InfrastructureError;

const SELECT_USER: &str = "SELECT id, email, phone, password, permissions, status, created_at FROM users";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// WHERE clause for an identity filter, with its contact binds in order
    pub(crate) fn where_clause(filter: &IdentityFilter) -> (&'static str, Vec<String>) {
        match (&filter.email, &filter.phone) {
            (Some(email), Some(phone)) => (
                "WHERE (id = ? OR (email = ? AND phone = ?)) AND permissions = ?",
                vec![email.clone(), phone.clone()],
            ),
            (Some(email), None) => ("WHERE (id = ? OR email = ?) AND permissions = ?", vec![email.clone()]),
            (None, Some(phone)) => ("WHERE (id = ? OR phone = ?) AND permissions = ?", vec![phone.clone()]),
            (None, None) => ("WHERE id = ? AND permissions = ?", Vec::new()),
        }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let permission: String = row.try_get("permissions").map_err(db_err)?;
        let status: String = row.try_get("status").map_err(db_err)?;

        Ok(User {
            id: row.try_get("id").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            phone: row.try_get("phone").map_err(db_err)?,
            password_hash: row.try_get("password").map_err(db_err)?,
            permission: permission
                .parse::<Permission>()
                .map_err(|e| DomainError::store(format!("Invalid permissions column: {}", e)))?,
            status: status
                .parse::<AccountStatus>()
                .map_err(|e| DomainError::store(format!("Invalid status column: {}", e)))?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(db_err)?,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ? LIMIT 1", SELECT_USER))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;
        Self::row_to_user(&row)
    }
}

fn db_err(e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "User query failed");
    InfrastructureError::Database(e).into()
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn get(&self, filter: &IdentityFilter) -> Result<User, DomainError> {
        let (clause, contacts) = Self::where_clause(filter);
        let sql = format!("{} {} ORDER BY id LIMIT 1", SELECT_USER, clause);

        let mut query = sqlx::query(&sql).bind(filter.id);
        for contact in contacts {
            query = query.bind(contact);
        }

        let row = query
            .bind(filter.permission.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::NotFound {
                resource: format!("{} user", filter.permission),
            }),
        }
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users (email, phone, password, permissions) VALUES (?, ?, ?, ?)")
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.password_hash)
            .bind(user.permission.as_str())
            .execute(&self.pool)
            .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AuthError::UserAlreadyExists.into());
            }
            Err(e) => return Err(db_err(e)),
        };

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| DomainError::store("Inserted id out of range"))?;
        tracing::debug!(user_id = id, "Inserted user row");

        self.find_by_id(id).await
    }

    async fn reset_password(&self, user: &User, new_hash: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(new_hash)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn verify_account(&self, user: &User, status: AccountStatus) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_clause_by_email() {
        let filter = IdentityFilter::by_email("a@x.com", Permission::Doctor);
        let (clause, binds) = MySqlUserRepository::where_clause(&filter);
        assert_eq!(clause, "WHERE (id = ? OR email = ?) AND permissions = ?");
        assert_eq!(binds, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn test_where_clause_by_email_and_phone() {
        let filter = IdentityFilter::by_contact(
            Some("a@x.com".to_string()),
            Some("+14155550123".to_string()),
            Permission::Patient,
        );
        let (clause, binds) = MySqlUserRepository::where_clause(&filter);
        assert!(clause.contains("email = ? AND phone = ?"));
        assert_eq!(binds.len(), 2);
    }

    #[test]
    fn test_where_clause_by_id_only() {
        let filter = IdentityFilter::by_session(9, None, Permission::Admin);
        let (clause, binds) = MySqlUserRepository::where_clause(&filter);
        assert_eq!(clause, "WHERE id = ? AND permissions = ?");
        assert!(binds.is_empty());
    }

    async fn live_repository() -> MySqlUserRepository {
        let config = ma_shared::config::DatabaseConfig::from_env().with_max_connections(2);
        let pool = crate::database::DatabasePool::new(config).await.unwrap();
        pool.run_migrations().await.unwrap();
        MySqlUserRepository::new(pool.get_pool().clone())
    }

    #[tokio::test]
    #[ignore] // Requires actual database
    async fn test_create_get_verify_round() {
        let repo = live_repository().await;
        let email = format!("it-{}@medauth.test", Utc::now().timestamp_nanos_opt().unwrap_or_default());

        let created = repo
            .create(NewUser {
                email: Some(email.clone()),
                phone: None,
                password_hash: "$2b$04$hash".to_string(),
                permission: Permission::Patient,
            })
            .await
            .unwrap();
        assert_eq!(created.status, AccountStatus::Pending);

        let duplicate = repo
            .create(NewUser {
                email: Some(email.clone()),
                phone: None,
                password_hash: "$2b$04$hash".to_string(),
                permission: Permission::Patient,
            })
            .await;
        assert!(matches!(duplicate, Err(DomainError::Auth(AuthError::UserAlreadyExists))));

        repo.verify_account(&created, AccountStatus::Verified).await.unwrap();
        let fetched = repo
            .get(&IdentityFilter::by_email(email, Permission::Patient))
            .await
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert!(fetched.is_verified());
    }
}
