// src/db/estatisticas_repo.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{common::error::AppError, models::cliente::Cliente};

// Consultas de leitura do painel; nenhuma escrita acontece aqui
#[derive(Clone)]
pub struct EstatisticasRepository {
    pool: SqlitePool,
}

impl EstatisticasRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count_active_clients(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes WHERE ativo = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    // Mensagens cuja data de envio cai no dia informado
    pub async fn count_messages_on(&self, dia: NaiveDate) -> Result<i64, AppError> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mensagens WHERE date(enviada_em) = ?")
                .bind(dia)
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    // Candidatos ao alerta de recompra: ativos com última compra registrada
    pub async fn clients_with_purchase(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE ativo = 1 AND ultima_compra IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(clientes)
    }
}
