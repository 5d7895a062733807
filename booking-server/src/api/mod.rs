//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 存活检查 (`GET /ping`)
//! - [`experiences`] - 体验列表和详情
//! - [`bookings`] - 预订创建
//! - [`promo_codes`] - 优惠码校验

pub mod bookings;
pub mod experiences;
pub mod health;
pub mod promo_codes;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// 合并所有资源路由
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(experiences::router())
        .merge(bookings::router())
        .merge(promo_codes::router())
}
