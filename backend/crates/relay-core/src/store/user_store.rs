use crate::{NewUser, Result as CoreErrorResult, User};

use async_trait::async_trait;

/// Registry of users, looked up by email.
///
/// Implementations must make [`UserStore::insert`] an atomic check-and-insert:
/// two concurrent inserts for the same email never both succeed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user registered under `email`, if any
    async fn find_by_email(&self, email: &str) -> CoreErrorResult<Option<User>>;

    /// Assign the next id and store the user.
    ///
    /// Fails with `CoreError::EmailTaken` if the email is already registered.
    async fn insert(&self, new_user: NewUser) -> CoreErrorResult<User>;

    /// Number of registered users
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
