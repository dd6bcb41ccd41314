// src/config.rs

use sha2::{Digest, Sha512};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::{env, time::Duration};
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    db::{ClienteRepository, EstatisticasRepository, MensagemRepository, UserRepository},
    services::{AuthService, ClienteService, EstatisticasService, MensagemService},
};

// Alias para a camada de sessão assinada usada pelo router
pub type SessionLayer = SessionManagerLayer<SqliteStore, SignedCookie>;

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth_service: AuthService,
    pub cliente_service: ClienteService,
    pub mensagem_service: MensagemService,
    pub estatisticas_service: EstatisticasService,
}

impl AppState {
    // Carrega as configurações do ambiente e monta o estado
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Sem DATABASE_URL, cai no arquivo local padrão
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://crm_gas.db?mode=rwc".to_string());

        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // Monta o gráfico de dependências a partir de um pool já criado
    pub fn from_pool(db_pool: SqlitePool) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let cliente_repo = ClienteRepository::new(db_pool.clone());
        let mensagem_repo = MensagemRepository::new(db_pool.clone());
        let estatisticas_repo = EstatisticasRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo);
        let cliente_service = ClienteService::new(cliente_repo.clone(), db_pool.clone());
        let mensagem_service = MensagemService::new(mensagem_repo, cliente_repo, db_pool.clone());
        let estatisticas_service = EstatisticasService::new(estatisticas_repo);

        Self {
            db_pool,
            auth_service,
            cliente_service,
            mensagem_service,
            estatisticas_service,
        }
    }
}

// Camada de sessão: cookie assinado, HttpOnly, 7 dias de inatividade
pub fn session_layer(store: SqliteStore) -> SessionLayer {
    SessionManagerLayer::new(store)
        .with_secure(false)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)))
        .with_signed(load_session_key())
}

// A chave de assinatura vem de SESSION_SECRET. Sem a variável, gera uma
// aleatória a cada início; as sessões não sobrevivem ao reinício nesse caso.
fn load_session_key() -> Key {
    match env::var("SESSION_SECRET") {
        Ok(secret) if !secret.is_empty() => {
            let digest = Sha512::digest(secret.as_bytes());
            Key::from(digest.as_slice())
        }
        _ => {
            tracing::warn!("SESSION_SECRET não definida; gerando chave efêmera de sessão");
            Key::generate()
        }
    }
}
