// src/models/cliente.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// O cliente como está no banco. `ativo` e `atualizado_em` ficam fora das
// respostas da API, igual ao restante do contrato.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,
    pub telefone: String,
    pub endereco: String,
    pub ciclo_dias: i64,
    pub ultima_compra: Option<NaiveDate>,
    pub observacoes: String,
    #[serde(skip_serializing)]
    pub ativo: bool,
    pub criado_em: NaiveDateTime,
    #[serde(skip_serializing)]
    pub atualizado_em: NaiveDateTime,
}

// Criação: só nome e telefone são obrigatórios; o resto tem padrão.
// `ultima_compra` chega como string ISO e é interpretada no serviço.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateClientePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,
    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub telefone: String,
    pub endereco: Option<String>,
    pub ciclo_dias: Option<i64>,
    pub ultima_compra: Option<String>,
    pub observacoes: Option<String>,
}

// Atualização parcial: cada campo só é aplicado quando presente no JSON.
// Campo ausente mantém o valor atual; não existe operação para limpar
// `ultima_compra` depois de definida.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateClientePayload {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub endereco: Option<String>,
    pub ciclo_dias: Option<i64>,
    pub ultima_compra: Option<String>,
    pub observacoes: Option<String>,
}
