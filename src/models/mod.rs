pub mod auth;
pub mod cliente;
pub mod estatisticas;
pub mod mensagem;
