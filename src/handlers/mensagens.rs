// src/handlers/mensagens.rs

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    common::error::AppError,
    config::AppState,
    models::mensagem::{EnviarMensagensPayload, Mensagem},
};

// POST /api/mensagens/enviar: registra o disparo em lote
pub async fn send_mensagens(
    State(app_state): State<AppState>,
    Json(payload): Json<EnviarMensagensPayload>,
) -> Result<Json<Value>, AppError> {
    let resumo = app_state
        .mensagem_service
        .send_bulk(&payload.clientes_ids, &payload.texto)
        .await?;

    Ok(Json(json!({
        "mensagem": format!("{} mensagens enviadas", resumo.enviadas),
        "enviadas": resumo.enviadas,
        "erros": resumo.erros,
    })))
}

// GET /api/mensagens/historico: as 100 mais recentes
pub async fn historico(State(app_state): State<AppState>) -> Result<Json<Vec<Mensagem>>, AppError> {
    let mensagens = app_state.mensagem_service.history().await?;
    Ok(Json(mensagens))
}
