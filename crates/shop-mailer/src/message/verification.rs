//! Verification email content.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};

use crate::transport::MailResult;

/// Subject line of the account verification email.
pub const VERIFICATION_SUBJECT: &str = "Email Verification of account";

const VERIFICATION_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Email Verification</title>
</head>
<body>
    <div>
        <h3>Account Verification</h3>
        <br>

        <p>Thank you for choosing our e-commerce services. Click the button below to verify your account.</p>
        <a href="{link}"><button>Verify</button></a>

        <p>If you do not recognise any activity like this, kindly ignore the email.</p>
    </div>
</body>
</html>
"#;

/// Build the verification link the email points at.
///
/// The token is a JWT (base64url segments joined by dots), so it needs no
/// further URL encoding.
pub fn verification_link(public_base_url: &str, token: &str) -> String {
    format!(
        "{}/verification?token={}",
        public_base_url.trim_end_matches('/'),
        token
    )
}

/// Render the HTML body around the verification link.
pub fn verification_body(link: &str) -> String {
    VERIFICATION_TEMPLATE.replace("{link}", link)
}

/// Assemble the full verification message.
pub fn build_verification_email(from: Mailbox, to: Mailbox, link: &str) -> MailResult<Message> {
    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(VERIFICATION_SUBJECT)
        .header(ContentType::TEXT_HTML)
        .body(verification_body(link))?;

    Ok(message)
}
