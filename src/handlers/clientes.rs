// src/handlers/clientes.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::cliente::{Cliente, CreateClientePayload, UpdateClientePayload},
};

// GET /api/clientes: somente ativos
pub async fn list_clientes(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let clientes = app_state.cliente_service.list_active().await?;
    Ok(Json(clientes))
}

// POST /api/clientes
pub async fn create_cliente(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateClientePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let id = app_state.cliente_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "mensagem": "Cliente criado com sucesso", "id": id })),
    ))
}

// PUT /api/clientes/{id}: atualização parcial
pub async fn update_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateClientePayload>,
) -> Result<Json<Value>, AppError> {
    app_state.cliente_service.update(id, payload).await?;
    Ok(Json(json!({ "mensagem": "Cliente atualizado com sucesso" })))
}

// DELETE /api/clientes/{id}: soft delete
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    app_state.cliente_service.deactivate(id).await?;
    Ok(Json(json!({ "mensagem": "Cliente excluído com sucesso" })))
}
