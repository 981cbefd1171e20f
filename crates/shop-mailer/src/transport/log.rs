//! Log-only mail transport.
//!
//! Writes the verification link to the log instead of delivering it.
//! Used in development and in tests where no SMTP relay is reachable.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::message::verification_link;

use super::{MailResult, Mailer};

/// Mailer that records verification links instead of sending them.
#[derive(Debug, Clone)]
pub struct LogMailer {
    public_base_url: String,
}

impl LogMailer {
    /// Create a log-only mailer building links against `public_base_url`.
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    #[instrument(skip(self, token))]
    async fn send_verification(&self, to: &str, token: &str) -> MailResult<()> {
        let link = verification_link(&self.public_base_url, token);
        info!(to = %to, link = %link, "Verification email (log transport)");
        Ok(())
    }
}
