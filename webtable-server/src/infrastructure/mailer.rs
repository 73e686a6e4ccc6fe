use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::infrastructure::settings::Settings;

#[derive(Debug, Error)]
pub(crate) enum MailerError {
    #[error("invalid mail address")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build mail message")]
    Build(#[from] lettre::error::Error),

    #[error("smtp transport failed")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends the account-confirmation mail. The auth service only sees this
/// trait, so tests drive it with a fake.
#[async_trait]
pub(crate) trait ConfirmationSender: Send + Sync {
    async fn send_confirmation(&self, email: &str, token: &str) -> Result<(), MailerError>;
}

pub(crate) struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
    public_base_url: String,
}

impl SmtpMailer {
    pub(crate) fn new(settings: &Settings) -> Result<Self, MailerError> {
        // relay() — implicit TLS, как SMTP_SSL у исходного сервиса
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.mail_server)?
            .port(settings.mail_port)
            .credentials(Credentials::new(
                settings.mail_username.clone(),
                settings.mail_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender: settings.mail_sender.clone(),
            public_base_url: settings.public_base_url.clone(),
        })
    }

    fn confirmation_body(&self, token: &str) -> String {
        let confirm_url = format!("{}/api/confirm/{token}", self.public_base_url);
        format!(
            "Здравствуйте!\n\n\
             Вы зарегистрировались в Нейростат.\n\
             Для подтверждения email перейдите по ссылке:\n\n\
             {confirm_url}\n\n\
             С уважением,\n\
             Команда Нейростат\n"
        )
    }
}

#[async_trait]
impl ConfirmationSender for SmtpMailer {
    async fn send_confirmation(&self, email: &str, token: &str) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.sender.parse()?)
            .to(email.parse()?)
            .subject("Подтвердите ваш email — Нейростат")
            .header(ContentType::TEXT_PLAIN)
            .body(self.confirmation_body(token))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
