//! Database Module
//!
//! Handles the embedded SurrealDB store, schema definition and seeding

pub mod models;
pub mod repository;
pub mod seed;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "booking";
const DATABASE: &str = "booking";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk store at the given path, creating it if missing
    pub async fn open(path: &str) -> Result<Self, AppError> {
        // RocksDB creates the leaf directory itself, but not parents
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::database(format!("Failed to create database dir: {e}")))?;
        }

        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self::finish(db).await?;
        tracing::info!("Database opened at {}", path);
        Ok(service)
    }

    /// Open an in-memory store (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::finish(db).await
    }

    async fn finish(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        Ok(Self { db })
    }
}

/// Define tables and unique indexes
///
/// `booking.refId` uniqueness backs the reference-id collision retry in
/// the booking repository; `promo_code.code` uniqueness keeps promo
/// lookups unambiguous.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "DEFINE TABLE IF NOT EXISTS experience SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS booking SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS promo_code SCHEMALESS;
         DEFINE INDEX IF NOT EXISTS uniq_booking_ref ON booking FIELDS refId UNIQUE;
         DEFINE INDEX IF NOT EXISTS uniq_promo_code ON promo_code FIELDS code UNIQUE;",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    Ok(())
}
