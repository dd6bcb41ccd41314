// src/services/estatisticas_service.rs

use chrono::{Duration, Local};

use crate::{
    common::error::AppError, db::EstatisticasRepository, models::estatisticas::Estatisticas,
};

#[derive(Clone)]
pub struct EstatisticasService {
    repo: EstatisticasRepository,
}

impl EstatisticasService {
    pub fn new(repo: EstatisticasRepository) -> Self {
        Self { repo }
    }

    // Tudo recalculado a cada chamada; nada é materializado
    pub async fn overview(&self) -> Result<Estatisticas, AppError> {
        let hoje = Local::now().date_naive();

        let total_clientes = self.repo.count_active_clients().await?;
        let mensagens_hoje = self.repo.count_messages_on(hoje).await?;

        // Em alerta: próxima compra esperada até hoje + 5 dias
        let data_limite = hoje + Duration::days(5);
        let mut clientes_alerta: i64 = 0;
        for cliente in self.repo.clients_with_purchase().await? {
            if let Some(ultima_compra) = cliente.ultima_compra {
                let proxima_compra = ultima_compra + Duration::days(cliente.ciclo_dias);
                if proxima_compra <= data_limite {
                    clientes_alerta += 1;
                }
            }
        }

        Ok(Estatisticas {
            total_clientes,
            mensagens_hoje,
            clientes_alerta,
            vendas_mes: 0,
        })
    }
}
