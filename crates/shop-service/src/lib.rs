//! # shop-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`services::ServiceContext`] and orchestrate the
//! repositories, mail transport, and media store behind it. Handlers in
//! the API crate construct one service per request.

pub mod dto;
pub mod services;

pub use dto::{
    BusinessResponse, CreateProductRequest, CurrentUserResponse, HealthResponse, LoginRequest,
    ProductDetailResponse, ProductResponse, ReadinessResponse, RegisterRequest, RegisterResponse,
    TokenResponse, UploadResponse, UserResponse, VerificationResponse, VerifyEmailRequest,
    STATIC_IMAGES_PATH,
};
pub use services::{
    AuthService, BusinessService, ProductService, RegistrationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
