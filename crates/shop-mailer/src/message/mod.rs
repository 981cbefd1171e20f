//! Verification email content module.
//!
//! Builds the subject, link, and HTML body of the account verification
//! message independently of the transport used to deliver it.

mod verification;

pub use verification::{
    build_verification_email, verification_body, verification_link, VERIFICATION_SUBJECT,
};
