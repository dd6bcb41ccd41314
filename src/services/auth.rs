// src/services/auth.rs

use bcrypt::{hash, verify};

use crate::{common::error::AppError, db::UserRepository, models::auth::Usuario};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    // O sistema está configurado quando já existe algum admin (ativo ou não)
    pub async fn is_configured(&self) -> Result<bool, AppError> {
        Ok(self.user_repo.find_admin().await?.is_some())
    }

    // Bootstrap único do administrador
    pub async fn create_admin(
        &self,
        nome: &str,
        email: &str,
        senha: &str,
    ) -> Result<Usuario, AppError> {
        if self.user_repo.find_admin().await?.is_some() {
            return Err(AppError::AlreadyConfigured);
        }

        // O hashing é caro demais para o executor async
        let senha_clone = senha.to_owned();
        let senha_hash =
            tokio::task::spawn_blocking(move || hash(&senha_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo
            .create_user(nome, email, &senha_hash, "admin")
            .await
    }

    // E-mail desconhecido e senha errada respondem a mesma coisa
    pub async fn login_user(&self, email: &str, senha: &str) -> Result<Usuario, AppError> {
        let usuario = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let senha_clone = senha.to_owned();
        let hash_clone = usuario.senha_hash.clone();

        // Executa a verificação em um thread separado
        let senha_valida = tokio::task::spawn_blocking(move || verify(&senha_clone, &hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::InvalidCredentials);
        }

        if !usuario.ativo {
            return Err(AppError::InactiveUser);
        }

        Ok(usuario)
    }

    // Usuário preso à sessão atual
    pub async fn current_user(&self, id: i64) -> Result<Usuario, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
