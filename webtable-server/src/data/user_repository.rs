use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{Profile, ProfileUpdate, User};

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
    pub(crate) confirm_token: String,
}

/// Row matched by an exact (email, password digest) pair at login.
#[derive(Debug, Clone)]
pub(crate) struct LoginCandidate {
    pub(crate) user: User,
    pub(crate) is_confirmed: bool,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create_unconfirmed(&self, input: NewUser) -> Result<(), DomainError>;

    /// Confirms the account holding `token` and clears the token in the same
    /// statement. Returns the confirmed user, or `None` when no row matches
    /// (unknown or already-consumed token).
    async fn consume_confirm_token(&self, token: &str) -> Result<Option<User>, DomainError>;

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<LoginCandidate>, DomainError>;

    async fn get_profile(&self, username: &str) -> Result<Option<Profile>, DomainError>;

    async fn update_profile(
        &self,
        username: &str,
        update: ProfileUpdate,
    ) -> Result<(), DomainError>;
}
