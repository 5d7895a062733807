//! Booking Model

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_record;

pub type BookingId = Thing;

/// Reference-id prefix handed back to the customer
pub const REF_ID_PREFIX: &str = "HUF";
/// Random base-36 characters appended to the prefix
pub const REF_ID_SUFFIX_LEN: usize = 5;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Booking model
///
/// Append-only ledger entry: created once by the booking flow,
/// immutable thereafter. Not reconciled against slot capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(
        default,
        with = "serde_record::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<BookingId>,
    /// Record link to the booked experience
    #[serde(with = "serde_record")]
    pub experience: Thing,
    /// Customer name, carried as-is (unvalidated)
    #[serde(default)]
    pub user_name: String,
    /// Customer email, carried as-is (unvalidated)
    #[serde(default)]
    pub user_email: String,
    pub date: String,
    pub time: String,
    pub quantity: i64,
    /// price * quantity + fixed surcharge, computed at creation
    pub total_amount: i64,
    /// Human-readable reference id, unique per booking
    pub ref_id: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Generate a candidate reference id: "HUF" + 5 random base-36 chars
    ///
    /// Uniqueness is enforced by the `uniq_booking_ref` index; the
    /// repository retries with a fresh candidate on conflict.
    pub fn generate_ref_id() -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..REF_ID_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("{REF_ID_PREFIX}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_id_has_prefix_and_length() {
        let ref_id = Booking::generate_ref_id();
        assert!(ref_id.starts_with(REF_ID_PREFIX));
        assert_eq!(ref_id.len(), REF_ID_PREFIX.len() + REF_ID_SUFFIX_LEN);
    }

    #[test]
    fn ref_id_suffix_is_upper_base36() {
        for _ in 0..100 {
            let ref_id = Booking::generate_ref_id();
            let suffix = &ref_id[REF_ID_PREFIX.len()..];
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
                "unexpected character in {}",
                ref_id
            );
        }
    }
}
