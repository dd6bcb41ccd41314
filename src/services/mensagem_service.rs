// src/services/mensagem_service.rs

use sqlx::SqlitePool;

use crate::{
    common::error::AppError,
    db::{ClienteRepository, MensagemRepository},
    models::mensagem::{Mensagem, ResumoEnvio},
};

// Token substituído pelo nome do cliente no texto do disparo
const TOKEN_NOME: &str = "[NOME]";

#[derive(Clone)]
pub struct MensagemService {
    repo: MensagemRepository,
    clientes: ClienteRepository,
    pool: SqlitePool,
}

impl MensagemService {
    pub fn new(repo: MensagemRepository, clientes: ClienteRepository, pool: SqlitePool) -> Self {
        Self {
            repo,
            clientes,
            pool,
        }
    }

    // Registra o lote inteiro numa única transação. Cliente inexistente vira
    // erro por item e não aborta o restante do lote.
    pub async fn send_bulk(&self, clientes_ids: &[i64], texto: &str) -> Result<ResumoEnvio, AppError> {
        if clientes_ids.is_empty() {
            return Err(AppError::EmptyRecipients);
        }
        if texto.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        let mut tx = self.pool.begin().await?;

        let mut enviadas: i64 = 0;
        let mut erros = Vec::new();

        for &cliente_id in clientes_ids {
            let Some(cliente) = self.clientes.find_by_id(&mut *tx, cliente_id).await? else {
                erros.push(format!("Cliente {} não encontrado", cliente_id));
                continue;
            };

            let texto_personalizado = texto.replace(TOKEN_NOME, &cliente.nome);
            self.repo
                .insert(&mut *tx, Some(cliente.id), &texto_personalizado, "enviada")
                .await?;
            enviadas += 1;
        }

        tx.commit().await?;

        Ok(ResumoEnvio { enviadas, erros })
    }

    pub async fn history(&self) -> Result<Vec<Mensagem>, AppError> {
        self.repo.list_recent(100).await
    }
}
