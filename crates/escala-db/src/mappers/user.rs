//! User entity <-> model mapper

use escala_core::entities::User;
use escala_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            full_name: model.full_name,
            // Stored values are written by this crate; unknown strings fall
            // back to the least privileged role.
            role: model.role.parse().unwrap_or_default(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
