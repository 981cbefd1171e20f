//! Business database model

use sqlx::FromRow;

/// Database model for businesses table
#[derive(Debug, Clone, FromRow)]
pub struct BusinessModel {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub region: String,
    pub description: Option<String>,
    pub logo: String,
    pub owner_id: i64,
}
