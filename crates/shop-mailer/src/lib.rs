//! # shop-mailer
//!
//! Delivery of the account verification email.
//!
//! ## Features
//!
//! - **Message building**: subject, link, and HTML body of the verification
//!   email, independent of transport
//! - **SMTP transport**: authenticated STARTTLS submission via lettre on
//!   the tokio runtime
//! - **Log transport**: records the verification link instead of sending,
//!   for development and tests
//!
//! ## Example
//!
//! ```ignore
//! use shop_common::AppConfig;
//! use shop_mailer::{Mailer, SmtpMailer};
//!
//! let config = AppConfig::from_env()?;
//! let mailer = SmtpMailer::from_config(&config.mail)?;
//! mailer.send_verification("alice@example.com", &token).await?;
//! ```

pub mod message;
pub mod transport;

// Re-export transport types
pub use transport::{LogMailer, MailError, MailResult, Mailer, SmtpMailer};

// Re-export message helpers
pub use message::{verification_link, VERIFICATION_SUBJECT};
