//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique index violations surface as "already contains" errors
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "order:abc".parse()?;
//   - 创建: let id = RecordId::from_table_key("order", "abc");
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId

/// Build a RecordId from a client-supplied id which may or may not carry
/// the "table:" prefix.
pub fn record_id(table: &str, id: &str) -> RecordId {
    let key = id
        .strip_prefix(&format!("{table}:"))
        .unwrap_or(id)
        .trim_matches(['⟨', '⟩']);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
