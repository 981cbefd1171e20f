//! Mail transport module.
//!
//! The [`Mailer`] trait abstracts delivery so the service layer behaves the
//! same against a real SMTP relay or the log-only transport used in
//! development and tests.

mod log;
mod smtp;

use async_trait::async_trait;

pub use log::LogMailer;
pub use smtp::SmtpMailer;

/// Error type for mail operations
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Result type for mail operations
pub type MailResult<T> = Result<T, MailError>;

/// Delivers account emails.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the verification email carrying the signed token to `to`.
    async fn send_verification(&self, to: &str, token: &str) -> MailResult<()>;
}
