use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("user already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid or consumed confirmation token")]
    InvalidToken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email is not confirmed")]
    NotConfirmed,

    #[error("no authenticated session")]
    Unauthorized,

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("confirmation mail was not delivered: {0}")]
    MailDelivery(String),

    #[error("profile was not saved: {0}")]
    ProfileNotSaved(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
