//! Experience Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_record;

pub type ExperienceId = Thing;

/// A single bookable time slot on a specific date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Time label, e.g. "09:00 AM"
    pub time: String,
    /// Remaining capacity; decremented by the booking flow, never negative
    #[serde(default)]
    pub available: i64,
}

/// Experience model
///
/// The `slots` mapping is the sole source of truth for remaining
/// capacity. `available_dates` is presentation metadata; the two are
/// not reconciled against each other anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(
        default,
        with = "serde_record::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ExperienceId>,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Price per unit, integer currency
    pub price: i64,
    pub image: String,
    #[serde(default)]
    pub available_dates: Vec<String>,
    /// Date string -> ordered slot list
    #[serde(default)]
    pub slots: BTreeMap<String, Vec<Slot>>,
}

impl Experience {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            location: location.into(),
            description: description.into(),
            about: None,
            price,
            image: image.into(),
            available_dates: Vec::new(),
            slots: BTreeMap::new(),
        }
    }
}
