//! Ministry entity <-> model mapper

use escala_core::entities::Ministry;
use escala_core::value_objects::Snowflake;

use crate::models::MinistryModel;

impl From<MinistryModel> for Ministry {
    fn from(model: MinistryModel) -> Self {
        Ministry {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            date: model.date,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
