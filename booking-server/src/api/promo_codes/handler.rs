//! PromoCode API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::DiscountType;
use crate::db::repository::PromoCodeRepository;
use crate::utils::{AppError, AppResult};

/// Promo validation response
///
/// 未知优惠码返回 404 且 `valid: false`，discount 字段省略
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<i64>,
    pub message: String,
}

/// GET /api/promocode/:code - 校验优惠码
pub async fn validate(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<(StatusCode, Json<PromoCodeResponse>)> {
    let repo = PromoCodeRepository::new(state.db.clone());
    let promo = repo
        .find_by_code(&code)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    match promo {
        Some(promo) => Ok((
            StatusCode::OK,
            Json(PromoCodeResponse {
                valid: true,
                discount_type: Some(promo.discount_type),
                discount_value: Some(promo.discount_value),
                message: promo.applied_message(),
            }),
        )),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(PromoCodeResponse {
                valid: false,
                discount_type: None,
                discount_value: None,
                message: "Invalid promo code".to_string(),
            }),
        )),
    }
}
