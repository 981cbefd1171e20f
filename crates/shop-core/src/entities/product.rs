//! Product entity - an item listed by a business

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Image filename assigned to every new product. Never deleted from disk.
pub const DEFAULT_PRODUCT_IMAGE: &str = "defaultproduct.jpg";

/// Product listing.
///
/// `discount` is derived from the two prices at creation time and stored,
/// not recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
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

/// Fields for a product that has not been persisted yet.
///
/// The id and the image default are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub original_price: Decimal,
    pub current_price: Decimal,
    pub discount: i32,
    pub discount_expiry_date: NaiveDate,
    pub business_id: i64,
}

impl Product {
    /// Discount percentage implied by the two prices, rounded to the
    /// nearest whole percent (ties to even).
    ///
    /// Callers must ensure `original_price > 0`.
    pub fn compute_discount(original_price: Decimal, current_price: Decimal) -> i32 {
        let ratio = (original_price - current_price) / original_price;
        (ratio * Decimal::from(100)).round().to_i32().unwrap_or(0)
    }
}
