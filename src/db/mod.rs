pub mod cliente_repo;
pub mod estatisticas_repo;
pub mod mensagem_repo;
pub mod user_repo;

pub use cliente_repo::ClienteRepository;
pub use estatisticas_repo::EstatisticasRepository;
pub use mensagem_repo::MensagemRepository;
pub use user_repo::UserRepository;
