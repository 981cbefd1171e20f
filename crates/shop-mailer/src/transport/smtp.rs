//! SMTP delivery via lettre (STARTTLS submission).

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, instrument};

use shop_common::MailConfig;

use crate::message::{build_verification_email, verification_link};

use super::{MailError, MailResult, Mailer};

/// Mailer delivering over an authenticated STARTTLS SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    public_base_url: String,
}

impl SmtpMailer {
    /// Build the SMTP transport from mail configuration.
    ///
    /// Fails when the relay host or the from address cannot be parsed.
    pub fn from_config(config: &MailConfig) -> MailResult<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();
        let from: Mailbox = config.from_address.parse()?;

        Ok(Self {
            transport,
            from,
            public_base_url: config.public_base_url.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip(self, token))]
    async fn send_verification(&self, to: &str, token: &str) -> MailResult<()> {
        let recipient: Mailbox = to.parse()?;
        let link = verification_link(&self.public_base_url, token);
        let email = build_verification_email(self.from.clone(), recipient, &link)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        info!(to = %to, "Verification email sent");

        Ok(())
    }
}
