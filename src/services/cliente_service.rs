// src/services/cliente_service.rs

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::ClienteRepository,
    models::cliente::{Cliente, CreateClientePayload, UpdateClientePayload},
};

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
    pool: SqlitePool,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository, pool: SqlitePool) -> Self {
        Self { repo, pool }
    }

    pub async fn list_active(&self) -> Result<Vec<Cliente>, AppError> {
        self.repo.list_active().await
    }

    pub async fn create(&self, payload: CreateClientePayload) -> Result<i64, AppError> {
        let ultima_compra = parse_data_opcional(payload.ultima_compra.as_deref())?;

        self.repo
            .create(
                &payload.nome,
                &payload.telefone,
                payload.endereco.as_deref().unwrap_or(""),
                payload.ciclo_dias.unwrap_or(30),
                ultima_compra,
                payload.observacoes.as_deref().unwrap_or(""),
            )
            .await
    }

    // Atualização parcial: só os campos presentes substituem os atuais
    pub async fn update(&self, id: i64, payload: UpdateClientePayload) -> Result<(), AppError> {
        let mut cliente = self
            .repo
            .find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::CustomerNotFound)?;

        if let Some(nome) = payload.nome {
            cliente.nome = nome;
        }
        if let Some(telefone) = payload.telefone {
            cliente.telefone = telefone;
        }
        if let Some(endereco) = payload.endereco {
            cliente.endereco = endereco;
        }
        if let Some(ciclo_dias) = payload.ciclo_dias {
            cliente.ciclo_dias = ciclo_dias;
        }
        // String vazia conta como ausente; não existe "limpar a data"
        if let Some(data) = parse_data_opcional(payload.ultima_compra.as_deref())? {
            cliente.ultima_compra = Some(data);
        }
        if let Some(observacoes) = payload.observacoes {
            cliente.observacoes = observacoes;
        }

        self.repo.update(&cliente).await
    }

    pub async fn deactivate(&self, id: i64) -> Result<(), AppError> {
        let afetadas = self.repo.deactivate(id).await?;
        if afetadas == 0 {
            return Err(AppError::CustomerNotFound);
        }
        Ok(())
    }
}

// String ISO (AAAA-MM-DD) → data; vazia ou ausente vira None
fn parse_data_opcional(valor: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match valor {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::InvalidDate),
        _ => Ok(None),
    }
}
