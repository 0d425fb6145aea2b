//! Database Module
//!
//! Owns the embedded SurrealDB handle and schema setup.

pub mod models;
pub mod repository;
pub mod seed;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "shop";
const DATABASE: &str = "shop";

/// Database service — owns the embedded SurrealDB handle
///
/// Constructed once at startup and injected into [`crate::core::ServerState`];
/// repositories clone the handle per request.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::init(&db).await?;
        tracing::info!(path = %db_path, "Database connection established");

        Ok(Self { db })
    }

    /// Open an in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open memory database: {e}")))?;

        Self::init(&db).await?;

        Ok(Self { db })
    }

    async fn init(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(db).await
    }

    /// Apply schema definitions
    ///
    /// The unique indexes are authoritative for the email/username
    /// invariants — handlers pre-check for friendlier messages, but a
    /// racing insert still fails here.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            "
            DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS user_email ON TABLE user COLUMNS email UNIQUE;
            DEFINE INDEX IF NOT EXISTS user_username ON TABLE user COLUMNS username UNIQUE;
            DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
            DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
            ",
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Schema definition failed: {e}")))?;

        tracing::info!("Database schema applied");
        Ok(())
    }
}
