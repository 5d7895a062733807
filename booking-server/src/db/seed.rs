//! First-run seed data
//!
//! 空库启动时写入示例体验和优惠码，与显式启动阶段一起在
//! 监听端口之前完成。非空库直接跳过。

use std::collections::BTreeMap;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{DiscountType, Experience, PromoCode, Slot};
use crate::db::repository::{ExperienceRepository, PromoCodeRepository};
use crate::utils::AppError;

/// Seed sample data when the experience table is empty
pub async fn seed_if_empty(db: &Surreal<Db>) -> Result<(), AppError> {
    let existing: Vec<Experience> = db
        .select("experience")
        .await
        .map_err(|e| AppError::database(format!("Failed to check seed state: {e}")))?;

    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("Empty store detected, seeding sample data");

    let experience_repo = ExperienceRepository::new(db.clone());
    for experience in sample_experiences() {
        experience_repo
            .insert(experience)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
    }

    let promo_repo = PromoCodeRepository::new(db.clone());
    for promo in sample_promo_codes() {
        promo_repo
            .insert(promo)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
    }

    tracing::info!("Seeded sample experiences and promo codes");
    Ok(())
}

fn slots_for(dates: &[&str], times: &[(&str, i64)]) -> (Vec<String>, BTreeMap<String, Vec<Slot>>) {
    let available_dates: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    let slots = dates
        .iter()
        .map(|date| {
            let day_slots = times
                .iter()
                .map(|(time, available)| Slot {
                    time: time.to_string(),
                    available: *available,
                })
                .collect();
            (date.to_string(), day_slots)
        })
        .collect();
    (available_dates, slots)
}

fn sample_experiences() -> Vec<Experience> {
    let mut experiences = Vec::new();

    let mut kayaking = Experience::new(
        "Sunrise Kayaking",
        "Udupi, Karnataka",
        "Paddle through calm backwaters as the sun comes up.",
        999,
        "/images/kayaking.jpg",
    );
    kayaking.about = Some(
        "A guided two-hour paddle through the mangroves. Beginners welcome; \
         all gear and a short safety briefing included."
            .to_string(),
    );
    let (dates, slots) = slots_for(
        &["2025-11-14", "2025-11-15", "2025-11-16"],
        &[("06:00 AM", 8), ("07:30 AM", 8)],
    );
    kayaking.available_dates = dates;
    kayaking.slots = slots;
    experiences.push(kayaking);

    let mut trek = Experience::new(
        "Kudremukh Day Trek",
        "Chikkamagaluru, Karnataka",
        "A full-day guided trek through rolling grasslands.",
        1499,
        "/images/kudremukh.jpg",
    );
    trek.about = Some(
        "Roughly 18 km round trip with a certified guide, forest permits, \
         and a packed lunch. Moderate fitness required."
            .to_string(),
    );
    let (dates, slots) = slots_for(
        &["2025-11-15", "2025-11-22"],
        &[("05:30 AM", 12)],
    );
    trek.available_dates = dates;
    trek.slots = slots;
    experiences.push(trek);

    let mut pottery = Experience::new(
        "Pottery Workshop",
        "Bengaluru, Karnataka",
        "Throw your first pot on the wheel in a small-group studio session.",
        799,
        "/images/pottery.jpg",
    );
    let (dates, slots) = slots_for(
        &["2025-11-14", "2025-11-21"],
        &[("11:00 AM", 6), ("03:00 PM", 6), ("05:30 PM", 4)],
    );
    pottery.available_dates = dates;
    pottery.slots = slots;
    experiences.push(pottery);

    experiences
}

fn sample_promo_codes() -> Vec<PromoCode> {
    vec![
        PromoCode::new("SAVE10", DiscountType::Percentage, 10),
        PromoCode::new("FLAT100", DiscountType::Flat, 100),
    ]
}
