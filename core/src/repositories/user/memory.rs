//! In-memory implementation of UserRepository
//!
//! Backs the test suite and the `memory` storage mode of the server.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{AccountStatus, NewUser, User};
use crate::errors::{AuthError, DomainError};

use super::filter::IdentityFilter;
use super::trait_::UserRepository;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: HashMap<i64, User>,
}

/// User repository held in process memory
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, filter: &IdentityFilter) -> Result<User, DomainError> {
        let table = self.table.read().await;
        let mut candidates: Vec<&User> = table.rows.values().filter(|u| filter.matches(u)).collect();
        candidates.sort_by_key(|u| u.id);
        candidates
            .first()
            .map(|u| (*u).clone())
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("{} user", filter.permission),
            })
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| collides(&user, u)) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        table.next_id += 1;
        let stored = User {
            id: table.next_id,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
            permission: user.permission,
            status: AccountStatus::Pending,
            created_at: Utc::now(),
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn reset_password(&self, user: &User, new_hash: &str) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        if let Some(stored) = table.rows.get_mut(&user.id) {
            stored.password_hash = new_hash.to_string();
        }
        Ok(())
    }

    async fn verify_account(&self, user: &User, status: AccountStatus) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        if let Some(stored) = table.rows.get_mut(&user.id) {
            stored.status = status;
        }
        Ok(())
    }
}

/// Email and phone are each unique within a permission
fn collides(new: &NewUser, existing: &User) -> bool {
    if new.permission != existing.permission {
        return false;
    }
    let same = |a: &Option<String>, b: &Option<String>| matches!((a, b), (Some(a), Some(b)) if !a.is_empty() && a == b);
    same(&new.email, &existing.email) || same(&new.phone, &existing.phone)
}
