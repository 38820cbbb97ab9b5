//! User repository implementation.
//!
//! JSON-file-backed implementation for signup persistence.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use chirp_domain::user::StoredUser;

use crate::{storage::JsonArrayFile, Result};

/// Repository trait for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a newly signed-up user.
    async fn append(&self, user: &StoredUser) -> Result<()>;

    /// List every stored user in signup order.
    async fn list(&self) -> Result<Vec<StoredUser>>;
}

/// Users persisted as one JSON array document.
#[derive(Debug)]
pub struct JsonFileUserRepository {
    document: JsonArrayFile<StoredUser>,
}

impl JsonFileUserRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonArrayFile::new(path),
        }
    }

    /// Location of the backing document
    pub fn path(&self) -> &Path {
        self.document.path()
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.user.user_id))]
    async fn append(&self, user: &StoredUser) -> Result<()> {
        let count = self.document.append(user).await?;
        info!(total_users = count, "User stored");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredUser>> {
        self.document.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_domain::{identifiers::UserId, user::User};
    use chrono::NaiveDate;

    fn stored(email: &str) -> StoredUser {
        StoredUser::new(
            User {
                user_id: UserId::new(),
                email: email.to_string(),
                first_name: "Facundo".to_string(),
                last_name: "García".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1998, 7, 21),
            },
            "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA",
        )
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileUserRepository::new(dir.path().join("users.json"));

        let first = stored("a@example.com");
        let second = stored("b@example.com");
        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileUserRepository::new(dir.path().join("users.json"));
        let user = stored("a@example.com");
        repo.append(&user).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(repo.path()).unwrap()).unwrap();
        let record = &raw[0];
        assert_eq!(record["user_id"], user.user.user_id.to_string());
        assert_eq!(record["birth_date"], "1998-07-21");
        assert!(record["password_hash"].is_string());
        assert!(record.get("password").is_none());
    }

    #[tokio::test]
    async fn test_duplicate_signups_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileUserRepository::new(dir.path().join("users.json"));
        let user = stored("a@example.com");
        repo.append(&user).await.unwrap();
        repo.append(&user).await.unwrap();

        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
