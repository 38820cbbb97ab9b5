//! Mock implementations for repositories.
//!
//! Provides in-memory mocks for testing without touching the filesystem.

use async_trait::async_trait;
use chirp_domain::user::StoredUser;
use chirp_infrastructure::{Error, Result, UserRepository};
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory user repository
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<StoredUser>>>,
    fail_writes: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose appends always fail with a storage error
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    pub fn stored_users(&self) -> Vec<StoredUser> {
        self.users.read().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn append(&self, user: &StoredUser) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Configuration("writes disabled".to_string()));
        }
        self.users.write().push(user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredUser>> {
        Ok(self.users.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_stored_user;

    #[tokio::test]
    async fn test_in_memory_repository() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_stored_user();
        repo.append(&user).await.unwrap();
        assert_eq!(repo.user_count(), 1);
        assert_eq!(repo.list().await.unwrap(), vec![user]);
    }

    #[tokio::test]
    async fn test_failing_repository() {
        let repo = InMemoryUserRepository::failing();
        assert!(repo.append(&create_test_stored_user()).await.is_err());
        assert_eq!(repo.user_count(), 0);
    }
}
