// src/models/mensagem.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Registro de envio. Imutável depois de criado: `status` nasce 'enviada' e
// `erro` só existirá quando houver um transporte real de mensagens.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mensagem {
    pub id: i64,
    pub cliente_id: Option<i64>,
    pub texto: String,
    pub enviada_em: NaiveDateTime,
    pub status: String,
    #[serde(skip_serializing)]
    pub erro: Option<String>,
}

// Disparo em lote para um conjunto de clientes
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EnviarMensagensPayload {
    pub clientes_ids: Vec<i64>,
    pub texto: String,
}

// Resumo do lote: quantas foram registradas e os erros por item
#[derive(Debug, Serialize)]
pub struct ResumoEnvio {
    pub enviadas: i64,
    pub erros: Vec<String>,
}
