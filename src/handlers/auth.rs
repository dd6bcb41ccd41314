// src/handlers/auth.rs

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedUser, SESSION_USUARIO_ID},
    models::auth::{LoginPayload, UsuarioPublico},
};

// Handler de login
pub async fn login(
    State(app_state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Value>, AppError> {
    let usuario = app_state
        .auth_service
        .login_user(&payload.email, &payload.senha)
        .await?;

    session.insert(SESSION_USUARIO_ID, usuario.id).await?;

    Ok(Json(json!({
        "mensagem": "Login realizado com sucesso",
        "usuario": UsuarioPublico::from(usuario),
    })))
}

// Logout é idempotente: limpar uma sessão inexistente também dá certo
pub async fn logout(session: Session) -> Result<Json<Value>, AppError> {
    session.flush().await?;
    Ok(Json(json!({ "mensagem": "Logout realizado com sucesso" })))
}

// Handler da rota protegida /usuario-atual
pub async fn current_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario_id): AuthenticatedUser,
) -> Result<Json<UsuarioPublico>, AppError> {
    let usuario = app_state.auth_service.current_user(usuario_id).await?;
    Ok(Json(UsuarioPublico::from(usuario)))
}
