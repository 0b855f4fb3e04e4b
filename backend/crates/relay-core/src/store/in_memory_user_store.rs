//! Process-lifetime user registry.
//!
//! Users live in an insertion-ordered `Vec` behind a `tokio::sync::RwLock`.
//! Lookups are a linear scan by email. `insert` holds the write guard across
//! the uniqueness check, id assignment and append, so duplicate signups that
//! race each other resolve to exactly one stored record.

use crate::{CoreError, NewUser, Result as CoreErrorResult, User, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> CoreErrorResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.has_email(email)).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> CoreErrorResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.has_email(&new_user.email)) {
            return Err(CoreError::EmailTaken {
                email: new_user.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // Records are never removed, so length + 1 stays unique and increasing
        let id = users.len() as u64 + 1;
        let user = new_user.into_user(id);
        users.push(user.clone());

        Ok(user)
    }

    async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}
