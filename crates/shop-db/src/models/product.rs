//! Product database model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub original_price: Decimal,
    pub current_price: Decimal,
    pub discount: i32,
    pub discount_expiry_date: NaiveDate,
    pub image: String,
    pub business_id: i64,
}
