//! Ministry service
//!
//! Plain CRUD over ministries. No conflict logic lives here; deleting a
//! ministry cascades to its slots at the store layer.

use escala_core::entities::Ministry;
use escala_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateMinistryRequest, MinistryResponse, UpdateMinistryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Ministry service
pub struct MinistryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MinistryService<'a> {
    /// Create a new MinistryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new ministry
    #[instrument(skip(self, request))]
    pub async fn create_ministry(
        &self,
        created_by: Snowflake,
        request: CreateMinistryRequest,
    ) -> ServiceResult<MinistryResponse> {
        let mut ministry = Ministry::new(
            self.ctx.generate_id(),
            request.title,
            request.date,
            created_by,
        );
        ministry.description = request.description;

        self.ctx.ministry_repo().create(&ministry).await?;

        info!(ministry_id = %ministry.id, created_by = %created_by, "Ministry created");

        Ok(MinistryResponse::from(ministry))
    }

    /// Get ministry by ID
    #[instrument(skip(self))]
    pub async fn get_ministry(&self, ministry_id: Snowflake) -> ServiceResult<MinistryResponse> {
        let ministry = self.resolve(ministry_id).await?;
        Ok(MinistryResponse::from(ministry))
    }

    /// List all ministries
    #[instrument(skip(self))]
    pub async fn list_ministries(&self) -> ServiceResult<Vec<MinistryResponse>> {
        let ministries = self.ctx.ministry_repo().list().await?;
        Ok(ministries.into_iter().map(MinistryResponse::from).collect())
    }

    /// Update a ministry
    #[instrument(skip(self, request))]
    pub async fn update_ministry(
        &self,
        ministry_id: Snowflake,
        request: UpdateMinistryRequest,
    ) -> ServiceResult<MinistryResponse> {
        let mut ministry = self.resolve(ministry_id).await?;

        if let Some(title) = request.title {
            ministry.title = title;
        }
        if let Some(description) = request.description {
            ministry.description = Some(description);
        }
        if let Some(date) = request.date {
            ministry.date = date;
        }

        self.ctx.ministry_repo().update(&ministry).await?;

        info!(ministry_id = %ministry.id, "Ministry updated");

        Ok(MinistryResponse::from(ministry))
    }

    /// Delete a ministry and, transitively, its slots
    #[instrument(skip(self))]
    pub async fn delete_ministry(&self, ministry_id: Snowflake) -> ServiceResult<()> {
        let ministry = self.resolve(ministry_id).await?;

        self.ctx.ministry_repo().delete(ministry.id).await?;

        info!(ministry_id = %ministry.id, "Ministry deleted");

        Ok(())
    }

    async fn resolve(&self, ministry_id: Snowflake) -> ServiceResult<Ministry> {
        self.ctx
            .ministry_repo()
            .find_by_id(ministry_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Ministry", ministry_id.to_string()))
    }
}
