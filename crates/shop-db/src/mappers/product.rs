//! Product entity <-> model mapper

use shop_core::entities::Product;

use crate::models::ProductModel;

/// Convert ProductModel to Product entity
impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            category: model.category,
            original_price: model.original_price,
            current_price: model.current_price,
            discount: model.discount,
            discount_expiry_date: model.discount_expiry_date,
            image: model.image,
            business_id: model.business_id,
        }
    }
}
