//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use shop_core::entities::{Business, Product, User};

use super::responses::{BusinessResponse, ProductDetailResponse, ProductResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
            date_joined: user.date_joined,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Business Mappers
// ============================================================================

impl From<&Business> for BusinessResponse {
    fn from(business: &Business) -> Self {
        Self {
            id: business.id,
            name: business.name.clone(),
            city: business.city.clone(),
            region: business.region.clone(),
            description: business.description.clone(),
            logo: business.logo.clone(),
            owner_id: business.owner_id,
        }
    }
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self::from(&business)
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            original_price: product.original_price,
            current_price: product.current_price,
            discount: product.discount,
            discount_expiry_date: product.discount_expiry_date,
            image: product.image.clone(),
            business_id: product.business_id,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

impl From<(Product, Business)> for ProductDetailResponse {
    fn from((product, business): (Product, Business)) -> Self {
        Self {
            product: ProductResponse::from(product),
            business: BusinessResponse::from(business),
        }
    }
}
