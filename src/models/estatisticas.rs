// src/models/estatisticas.rs

use serde::Serialize;

// Os contadores do painel, calculados a cada requisição
#[derive(Debug, Serialize)]
pub struct Estatisticas {
    pub total_clientes: i64,
    pub mensagens_hoje: i64,
    pub clientes_alerta: i64,
    // Ainda não calculado nesta versão; sempre zero
    pub vendas_mes: i64,
}
