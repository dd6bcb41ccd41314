// src/db/cliente_repo.rs

use chrono::{NaiveDate, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{common::error::AppError, models::cliente::Cliente};

#[derive(Clone)]
pub struct ClienteRepository {
    pool: SqlitePool,
}

impl ClienteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // Somente ativos: o soft delete tira o cliente das listagens
    pub async fn list_active(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE ativo = 1")
            .fetch_all(&self.pool)
            .await?;
        Ok(clientes)
    }

    // Busca por id sem olhar o flag `ativo` (o envio de mensagens ainda
    // alcança clientes desativados). Genérico sobre o executor para poder
    // rodar dentro de uma transação.
    pub async fn find_by_id<'e, E>(&self, executor: E, id: i64) -> Result<Option<Cliente>, AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let maybe_cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(maybe_cliente)
    }

    pub async fn create(
        &self,
        nome: &str,
        telefone: &str,
        endereco: &str,
        ciclo_dias: i64,
        ultima_compra: Option<NaiveDate>,
        observacoes: &str,
    ) -> Result<i64, AppError> {
        let agora = Utc::now().naive_utc();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clientes
                (nome, telefone, endereco, ciclo_dias, ultima_compra, observacoes, ativo, criado_em, atualizado_em)
            VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?)
            RETURNING id
            "#,
        )
        .bind(nome)
        .bind(telefone)
        .bind(endereco)
        .bind(ciclo_dias)
        .bind(ultima_compra)
        .bind(observacoes)
        .bind(agora)
        .bind(agora)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    // Regrava a linha já mesclada pelo serviço; `atualizado_em` sempre avança
    pub async fn update(&self, cliente: &Cliente) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE clientes
            SET nome = ?, telefone = ?, endereco = ?, ciclo_dias = ?,
                ultima_compra = ?, observacoes = ?, atualizado_em = ?
            WHERE id = ?
            "#,
        )
        .bind(&cliente.nome)
        .bind(&cliente.telefone)
        .bind(&cliente.endereco)
        .bind(cliente.ciclo_dias)
        .bind(cliente.ultima_compra)
        .bind(&cliente.observacoes)
        .bind(Utc::now().naive_utc())
        .bind(cliente.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // Soft delete: a linha permanece no banco, fora das listagens
    pub async fn deactivate(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE clientes SET ativo = 0, atualizado_em = ? WHERE id = ?")
            .bind(Utc::now().naive_utc())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
