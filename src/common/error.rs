use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia inteira vira JSON `{"erro": ...}` em um único lugar.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Não autenticado")]
    NotAuthenticated,

    #[error("Email ou senha incorretos")]
    InvalidCredentials,

    #[error("Usuário inativo")]
    InactiveUser,

    #[error("Sistema já configurado")]
    AlreadyConfigured,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Cliente não encontrado")]
    CustomerNotFound,

    #[error("Nenhum cliente selecionado")]
    EmptyRecipients,

    #[error("Mensagem vazia")]
    EmptyMessage,

    #[error("Data inválida")]
    InvalidDate,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro de migração")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de sessão")]
    SessionError(#[from] tower_sessions::session::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut detalhes = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    detalhes.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "erro": "Um ou mais campos são inválidos.",
                    "detalhes": detalhes,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "Não autenticado"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Email ou senha incorretos"),
            AppError::InactiveUser => (StatusCode::UNAUTHORIZED, "Usuário inativo"),
            AppError::AlreadyConfigured => (StatusCode::CONFLICT, "Sistema já configurado"),
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado"),
            AppError::CustomerNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado"),
            AppError::EmptyRecipients => (StatusCode::BAD_REQUEST, "Nenhum cliente selecionado"),
            AppError::EmptyMessage => (StatusCode::BAD_REQUEST, "Mensagem vazia"),
            AppError::InvalidDate => (StatusCode::BAD_REQUEST, "Data inválida"),

            // Todos os outros erros (banco, sessão, bcrypt...) viram 500.
            // O `tracing` loga a mensagem detalhada; o cliente recebe só o genérico.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "erro": error_message }));
        (status, body).into_response()
    }
}
