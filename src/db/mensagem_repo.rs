// src/db/mensagem_repo.rs

use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::mensagem::Mensagem};

#[derive(Clone)]
pub struct MensagemRepository {
    pool: SqlitePool,
}

impl MensagemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Insere um registro de envio; roda dentro da transação do lote
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        cliente_id: Option<i64>,
        texto: &str,
        status: &str,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            "INSERT INTO mensagens (cliente_id, texto, enviada_em, status) VALUES (?, ?, ?, ?)",
        )
        .bind(cliente_id)
        .bind(texto)
        .bind(Utc::now().naive_utc())
        .bind(status)
        .execute(executor)
        .await?;

        Ok(())
    }

    // As mais recentes primeiro, limitadas pelo chamador
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Mensagem>, AppError> {
        let mensagens =
            sqlx::query_as::<_, Mensagem>("SELECT * FROM mensagens ORDER BY enviada_em DESC LIMIT ?")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;
        Ok(mensagens)
    }
}
