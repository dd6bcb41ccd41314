pub mod auth;
pub mod cliente_service;
pub mod estatisticas_service;
pub mod mensagem_service;

pub use auth::AuthService;
pub use cliente_service::ClienteService;
pub use estatisticas_service::EstatisticasService;
pub use mensagem_service::MensagemService;
