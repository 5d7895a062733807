//! Booking API Handlers
//!
//! 预订创建是系统中唯一的有状态流程：在体验级互斥锁内完成
//! 读取-校验-扣减-持久化，保证同一体验的并发预订串行执行，
//! 时段容量不会超卖。

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{BookingCreate, BookingRepository, ExperienceRepository};
use crate::utils::{AppError, AppResult};

/// Fixed per-booking surcharge added on top of price * quantity
const BOOKING_FEE: i64 = 59;

/// POST /api/bookings request body
///
/// 必填字段缺失时统一返回 "Missing required fields"；
/// userName/userEmail 原样透传，不做校验
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub experience_id: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub message: String,
    pub ref_id: String,
    pub total_amount: i64,
}

/// POST /api/bookings - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let (Some(experience_id), Some(date), Some(time), Some(quantity)) = (
        payload.experience_id,
        payload.date,
        payload.time,
        payload.quantity,
    ) else {
        return Err(AppError::validation("Missing required fields"));
    };
    if quantity < 1 {
        return Err(AppError::validation("Missing required fields"));
    }

    // 同一体验的读-改-写在这把锁内串行
    let lock = state.slot_locks.for_experience(&experience_id);
    let _guard = lock.lock().await;

    let experience_repo = ExperienceRepository::new(state.db.clone());
    let mut experience = experience_repo
        .find_by_id(&experience_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("Experience not found"))?;

    let Some(day_slots) = experience.slots.get_mut(&date) else {
        return Err(AppError::validation("Invalid date selected"));
    };

    let Some(slot) = day_slots.iter_mut().find(|s| s.time == time) else {
        return Err(AppError::validation("Not enough availability"));
    };
    if slot.available < quantity {
        return Err(AppError::validation("Not enough availability"));
    }

    slot.available -= quantity;

    experience_repo
        .save_slots(&experience_id, &experience.slots)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let total_amount = experience.price * quantity + BOOKING_FEE;

    let experience_record = experience
        .id
        .ok_or_else(|| AppError::internal("Experience record missing id"))?;

    let booking_repo = BookingRepository::new(state.db.clone());
    let booking = booking_repo
        .create(BookingCreate {
            experience: experience_record,
            user_name: payload.user_name,
            user_email: payload.user_email,
            date,
            time,
            quantity,
            total_amount,
        })
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(
        ref_id = %booking.ref_id,
        quantity,
        total_amount,
        "Booking confirmed"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Booking confirmed".to_string(),
            ref_id: booking.ref_id,
            total_amount,
        }),
    ))
}
