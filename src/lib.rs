pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    http::{header, Method},
    middleware as axum_middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{AppState, SessionLayer};

use crate::middleware::auth::auth_guard;

// GET /: banner do serviço
async fn index() -> Json<Value> {
    Json(json!({
        "mensagem": "API do CRM de Gás",
        "versao": env!("CARGO_PKG_VERSION"),
        "status": "online",
        "endpoints": {
            "init_db": "/api/init-db",
            "verificar_setup": "/api/setup/verificar",
            "criar_admin": "/api/setup/criar-admin",
        },
    }))
}

// Monta o router completo. A camada de sessão vem pronta de fora porque o
// store precisa estar migrado antes de atender requisições.
pub fn app_router(app_state: AppState, session_layer: SessionLayer) -> Router {
    use axum::routing::{post, put};

    // Rotas de setup (públicas)
    let setup_routes = Router::new()
        .route("/verificar", get(handlers::setup::verify_setup))
        .route("/criar-admin", post(handlers::setup::create_admin));

    // Rotas de autenticação; só /usuario-atual exige sessão
    // (logout é idempotente e fica fora do guard de propósito)
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route(
            "/usuario-atual",
            get(handlers::auth::current_user).layer(axum_middleware::from_fn(auth_guard)),
        );

    // Rotas de clientes (protegidas pelo middleware)
    let cliente_routes = Router::new()
        .route(
            "/",
            get(handlers::clientes::list_clientes).post(handlers::clientes::create_cliente),
        )
        .route(
            "/{id}",
            put(handlers::clientes::update_cliente).delete(handlers::clientes::delete_cliente),
        )
        .layer(axum_middleware::from_fn(auth_guard));

    // Rotas de mensagens (protegidas)
    let mensagem_routes = Router::new()
        .route("/enviar", post(handlers::mensagens::send_mensagens))
        .route("/historico", get(handlers::mensagens::historico))
        .layer(axum_middleware::from_fn(auth_guard));

    // CORS liberado para qualquer origem, com credenciais: o cookie de
    // sessão precisa trafegar, e wildcard não convive com credenciais,
    // então a origem é espelhada da requisição.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        .route(
            "/init-db",
            get(handlers::setup::init_db).post(handlers::setup::init_db),
        )
        .nest("/setup", setup_routes)
        .nest("/auth", auth_routes)
        .nest("/clientes", cliente_routes)
        .nest("/mensagens", mensagem_routes)
        .route(
            "/estatisticas",
            get(handlers::estatisticas::estatisticas).layer(axum_middleware::from_fn(auth_guard)),
        )
        .layer(cors);

    // Combina tudo no router principal
    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
