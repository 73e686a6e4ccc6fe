use rand::{RngExt, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use tracing::error;

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, RegisterRequest, User};
use crate::infrastructure::mailer::ConfirmationSender;

pub(crate) struct AuthService<R: UserRepository, M: ConfirmationSender> {
    repo: R,
    mailer: M,
}

impl<R: UserRepository, M: ConfirmationSender> AuthService<R, M> {
    const CONFIRM_TOKEN_LEN: usize = 43;

    pub(crate) fn new(repo: R, mailer: M) -> Self {
        Self { repo, mailer }
    }

    /// Creates the unconfirmed account, then mails the confirmation link.
    /// A failed mail send leaves the already-inserted row in place; the
    /// caller gets a distinct "could not send" error.
    pub(crate) async fn register(&self, req: RegisterRequest) -> Result<(), DomainError> {
        let password_hash = Self::hash_password(&req.password);
        let confirm_token = Self::generate_confirm_token();

        self.repo
            .create_unconfirmed(NewUser {
                username: req.username,
                email: req.email.clone(),
                password_hash,
                confirm_token: confirm_token.clone(),
            })
            .await?;

        if let Err(err) = self.mailer.send_confirmation(&req.email, &confirm_token).await {
            error!("confirmation mail to {} failed: {err}", req.email);
            return Err(DomainError::MailDelivery(err.to_string()));
        }

        Ok(())
    }

    pub(crate) async fn confirm(&self, token: &str) -> Result<User, DomainError> {
        self.repo
            .consume_confirm_token(token)
            .await?
            .ok_or(DomainError::InvalidToken)
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<User, DomainError> {
        let password_hash = Self::hash_password(&req.password);

        let candidate = self
            .repo
            .find_by_credentials(&req.email, &password_hash)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !candidate.is_confirmed {
            return Err(DomainError::NotConfirmed);
        }

        Ok(candidate.user)
    }

    pub(crate) fn hash_password(raw_password: &str) -> String {
        hex::encode(Sha256::digest(raw_password.as_bytes()))
    }

    fn generate_confirm_token() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(Self::CONFIRM_TOKEN_LEN)
            .map(char::from)
            .collect()
    }
}
