// src/db/user_repo.rs

use sqlx::SqlitePool;

use crate::{common::error::AppError, models::auth::Usuario};

// O repositório de usuários, responsável por todas as interações com a tabela 'usuarios'
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let maybe_usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_usuario)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Usuario>, AppError> {
        let maybe_usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_usuario)
    }

    // Qualquer linha com nível 'admin' conta, ativa ou não
    pub async fn find_admin(&self) -> Result<Option<Usuario>, AppError> {
        let maybe_admin =
            sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE nivel = 'admin' LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_admin)
    }

    // Cria um novo usuário no banco de dados
    // Com tratamento de erro específico para e-mails duplicados.
    pub async fn create_user(
        &self,
        nome: &str,
        email: &str,
        senha_hash: &str,
        nivel: &str,
    ) -> Result<Usuario, AppError> {
        let agora = chrono::Utc::now().naive_utc();

        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nome, email, senha_hash, nivel, ativo, criado_em)
            VALUES (?, ?, ?, ?, 1, ?)
            RETURNING *
            "#,
        )
        .bind(nome)
        .bind(email)
        .bind(senha_hash)
        .bind(nivel)
        .bind(agora)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Converte violação de chave única em um erro mais amigável
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })
    }
}
