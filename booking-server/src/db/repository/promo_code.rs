//! PromoCode Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::PromoCode;

const TABLE: &str = "promo_code";

#[derive(Clone)]
pub struct PromoCodeRepository {
    base: BaseRepository,
}

impl PromoCodeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Case-insensitive lookup: codes are stored upper-cased
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<PromoCode>> {
        let code = code.trim().to_uppercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM promo_code WHERE code = $code LIMIT 1")
            .bind(("code", code))
            .await?;
        let promos: Vec<PromoCode> = result.take(0)?;
        Ok(promos.into_iter().next())
    }

    /// Insert a new promo code (seeding)
    pub async fn insert(&self, promo: PromoCode) -> RepoResult<PromoCode> {
        let created: Option<PromoCode> = self.base.db().create(TABLE).content(promo).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create promo code".to_string()))
    }
}
