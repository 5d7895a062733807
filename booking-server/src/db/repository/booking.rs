//! Booking Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Booking;

const TABLE: &str = "booking";

/// Attempts at minting a unique reference id before giving up
const MAX_REF_ID_ATTEMPTS: usize = 5;

/// Booking for creation (id, refId and timestamp are assigned here)
#[derive(Debug, Clone)]
pub struct BookingCreate {
    pub experience: Thing,
    pub user_name: String,
    pub user_email: String,
    pub date: String,
    pub time: String,
    pub quantity: i64,
    pub total_amount: i64,
}

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new booking with a freshly generated reference id
    ///
    /// The unique index on `refId` is the collision check; on a
    /// duplicate we mint a new id and try again, bounded by
    /// [`MAX_REF_ID_ATTEMPTS`].
    pub async fn create(&self, data: BookingCreate) -> RepoResult<Booking> {
        for _ in 0..MAX_REF_ID_ATTEMPTS {
            let booking = Booking {
                id: None,
                experience: data.experience.clone(),
                user_name: data.user_name.clone(),
                user_email: data.user_email.clone(),
                date: data.date.clone(),
                time: data.time.clone(),
                quantity: data.quantity,
                total_amount: data.total_amount,
                ref_id: Booking::generate_ref_id(),
                created_at: Utc::now(),
            };

            match self.base.db().create(TABLE).content(booking).await {
                Ok(Some(created)) => return Ok(created),
                Ok(None) => {
                    return Err(RepoError::Database("Failed to create booking".to_string()));
                }
                Err(e) if is_unique_index_violation(&e) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(RepoError::Duplicate(
            "Could not allocate a unique booking reference".to_string(),
        ))
    }

}

/// SurrealDB reports unique-index conflicts as a plain error string
fn is_unique_index_violation(err: &surrealdb::Error) -> bool {
    let msg = err.to_string();
    msg.contains("already contains") || msg.contains("unique")
}
