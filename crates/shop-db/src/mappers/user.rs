//! User entity <-> model mapper

use shop_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash never leaves the database layer; it is read through
/// `UserRepository::get_password_hash` only.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            is_verified: model.is_verified,
            date_joined: model.date_joined,
        }
    }
}
