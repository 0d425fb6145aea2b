//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User model matching SurrealDB schema
///
/// `email` and `username` carry unique indexes (see `DbService::define_schema`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_admin: bool,
}

/// Create user payload (internal — the signup handler builds this)
///
/// `hash_pass` is already an argon2 digest. Hashing happens exactly once,
/// in the signup handler, before the record reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub username: String,
    pub hash_pass: String,
    pub is_admin: bool,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let digest = User::hash_password("hunter2").expect("hashing failed");
        assert_ne!(digest, "hunter2");

        let user = User {
            id: None,
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
            hash_pass: digest,
            is_admin: false,
        };

        assert!(user.verify_password("hunter2").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
