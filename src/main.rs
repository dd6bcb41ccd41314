//src/main.rs

use crm_gas_backend::{app_router, config, AppState};
use tokio::net::TcpListener;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Inicializa o logger; RUST_LOG controla o filtro
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_gas_backend=debug,tower_http=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // As sessões moram no mesmo banco, em tabela própria
    let session_store = SqliteStore::new(app_state.db_pool.clone())
        .with_table_name("sessoes")
        .expect("Nome inválido para a tabela de sessões");
    session_store
        .migrate()
        .await
        .expect("Falha ao migrar a tabela de sessões.");

    let app = app_router(app_state, config::session_layer(session_store));

    // Inicia o servidor
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let listener = TcpListener::bind(format!("{host}:{port}"))
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
