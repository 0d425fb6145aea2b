//! User Repository (Credential Store)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const USER_TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(user)
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self
            .base
            .db()
            .query("SELECT * FROM user WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?
            .take(0)?;
        Ok(user)
    }

    /// Count all users
    ///
    /// Drives the first-user-becomes-admin rule at signup.
    pub async fn count(&self) -> RepoResult<i64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM user GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Create a new user
    ///
    /// `data.hash_pass` must already be a digest — this store never hashes.
    /// A unique-index violation on email or username surfaces as
    /// [`RepoError::Duplicate`].
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let created: Option<User> = self.base.db().create(USER_TABLE).content(data).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
