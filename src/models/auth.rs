// src/models/auth.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Representa um usuário vindo do banco de dados.
// Nunca é serializado diretamente: as respostas usam `UsuarioPublico`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha_hash: String,
    pub nivel: String,
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
}

// Campos públicos do usuário (o hash jamais sai do servidor)
#[derive(Debug, Serialize)]
pub struct UsuarioPublico {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub nivel: String,
}

impl From<Usuario> for UsuarioPublico {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nome: u.nome,
            email: u.email,
            nivel: u.nivel,
        }
    }
}

// Dados para o bootstrap do administrador
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateAdminPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub senha: String,
}

// Dados para login. Sem validação de formato: credenciais que não batem
// respondem 401, nunca 400 (não revela se o e-mail existe).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub email: String,
    pub senha: String,
}
