// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::common::error::AppError;

// Única chave guardada na sessão assinada
pub const SESSION_USUARIO_ID: &str = "usuario_id";

// O middleware em si: sem id na sessão, a requisição nem chega ao handler
pub async fn auth_guard(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let usuario_id: Option<i64> = session.get(SESSION_USUARIO_ID).await?;

    match usuario_id {
        Some(id) => {
            // Insere o id autenticado nos "extensions" da requisição
            request.extensions_mut().insert(AuthenticatedUser(id));
            Ok(next.run(request).await)
        }
        None => Err(AppError::NotAuthenticated),
    }
}

// Extrator para obter o usuário autenticado diretamente nos handlers
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i64);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AppError::NotAuthenticated)
    }
}
