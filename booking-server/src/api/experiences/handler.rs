//! Experience API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::Experience;
use crate::db::repository::ExperienceRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/experiences - 获取所有体验
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Experience>>> {
    let repo = ExperienceRepository::new(state.db.clone());
    let experiences = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(experiences))
}

/// GET /api/experiences/:id - 获取单个体验
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Experience>> {
    let repo = ExperienceRepository::new(state.db.clone());
    let experience = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("Not found"))?;
    Ok(Json(experience))
}
