//! Business entity - the storefront profile owned by a user

/// Logo filename assigned to every new business. Never deleted from disk.
pub const DEFAULT_BUSINESS_LOGO: &str = "default.jpg";

/// Business profile.
///
/// Every user owns exactly one business, created during registration with
/// the username as its name. Products hang off the business, not the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub region: String,
    pub description: Option<String>,
    pub logo: String,
    pub owner_id: i64,
}
