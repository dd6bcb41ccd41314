// src/handlers/setup.rs

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::SESSION_USUARIO_ID,
    models::auth::{CreateAdminPayload, UsuarioPublico},
};

// GET/POST /api/init-db: criação idempotente do esquema
pub async fn init_db(State(app_state): State<AppState>) -> Result<Json<Value>, AppError> {
    sqlx::migrate!().run(&app_state.db_pool).await?;

    let tabelas: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&app_state.db_pool)
            .await?;

    Ok(Json(json!({
        "mensagem": "BD inicializado",
        "tabelas": tabelas,
        "status": "ok",
    })))
}

// GET /api/setup/verificar
// Falha de banco responde 200 com o aviso de inicialização, nunca 500:
// o assistente de configuração do frontend depende desse formato.
pub async fn verify_setup(State(app_state): State<AppState>) -> Json<Value> {
    match app_state.auth_service.is_configured().await {
        Ok(configurado) => Json(json!({ "configurado": configurado })),
        Err(e) => Json(json!({
            "configurado": false,
            "erro_db": e.to_string(),
            "precisa_init": true,
        })),
    }
}

// POST /api/setup/criar-admin: operação única; já abre a sessão
pub async fn create_admin(
    State(app_state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdminPayload>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let admin = app_state
        .auth_service
        .create_admin(&payload.nome, &payload.email, &payload.senha)
        .await?;

    session.insert(SESSION_USUARIO_ID, admin.id).await?;

    Ok(Json(json!({
        "mensagem": "Administrador criado com sucesso",
        "usuario": UsuarioPublico::from(admin),
    })))
}
