pub mod auth;
pub mod clientes;
pub mod estatisticas;
pub mod mensagens;
pub mod setup;
