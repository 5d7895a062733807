//! Experience Repository

use std::collections::BTreeMap;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_record, strip_table_prefix};
use crate::db::models::{Experience, Slot};

const TABLE: &str = "experience";

#[derive(Clone)]
pub struct ExperienceRepository {
    base: BaseRepository,
}

impl ExperienceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all experiences ordered by title
    pub async fn find_all(&self) -> RepoResult<Vec<Experience>> {
        let experiences: Vec<Experience> = self
            .base
            .db()
            .query("SELECT * FROM experience ORDER BY title")
            .await?
            .take(0)?;
        Ok(experiences)
    }

    /// Find experience by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Experience>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let experience: Option<Experience> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(experience)
    }

    /// Write the full slot mapping back onto an experience
    ///
    /// Callers mutate capacity on a copy they read under the
    /// per-experience booking lock, then persist it here.
    pub async fn save_slots(
        &self,
        id: &str,
        slots: &BTreeMap<String, Vec<Slot>>,
    ) -> RepoResult<Experience> {
        let record = make_record(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $record MERGE { slots: $slots }")
            .bind(("record", record))
            .bind(("slots", slots.clone()))
            .await?;

        let updated: Option<Experience> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Experience {} not found", id)))
    }

    /// Insert a new experience (seeding and tests)
    pub async fn insert(&self, experience: Experience) -> RepoResult<Experience> {
        let created: Option<Experience> = self.base.db().create(TABLE).content(experience).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create experience".to_string()))
    }
}
