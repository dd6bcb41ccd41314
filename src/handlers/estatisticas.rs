// src/handlers/estatisticas.rs

use axum::{extract::State, Json};

use crate::{common::error::AppError, config::AppState, models::estatisticas::Estatisticas};

// GET /api/estatisticas
pub async fn estatisticas(
    State(app_state): State<AppState>,
) -> Result<Json<Estatisticas>, AppError> {
    let painel = app_state.estatisticas_service.overview().await?;
    Ok(Json(painel))
}
