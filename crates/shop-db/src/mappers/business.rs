//! Business entity <-> model mapper

use shop_core::entities::Business;

use crate::models::BusinessModel;

/// Convert BusinessModel to Business entity
impl From<BusinessModel> for Business {
    fn from(model: BusinessModel) -> Self {
        Business {
            id: model.id,
            name: model.name,
            city: model.city,
            region: model.region,
            description: model.description,
            logo: model.logo,
            owner_id: model.owner_id,
        }
    }
}
