//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use escala_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with ministry_id
#[derive(Debug, serde::Deserialize)]
pub struct MinistryIdPath {
    pub ministry_id: String,
}

impl MinistryIdPath {
    /// Parse ministry_id as Snowflake
    pub fn ministry_id(&self) -> Result<Snowflake, ApiError> {
        self.ministry_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid ministry_id format"))
    }
}

/// Path parameters with slot_id
#[derive(Debug, serde::Deserialize)]
pub struct SlotIdPath {
    pub slot_id: String,
}

impl SlotIdPath {
    /// Parse slot_id as Snowflake
    pub fn slot_id(&self) -> Result<Snowflake, ApiError> {
        self.slot_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid slot_id format"))
    }
}

/// Path parameters with invite_id
#[derive(Debug, serde::Deserialize)]
pub struct InviteIdPath {
    pub invite_id: String,
}

impl InviteIdPath {
    /// Parse invite_id as Snowflake
    pub fn invite_id(&self) -> Result<Snowflake, ApiError> {
        self.invite_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid invite_id format"))
    }
}

/// Path parameters with slot_id and user_id
#[derive(Debug, serde::Deserialize)]
pub struct SlotUserPath {
    pub slot_id: String,
    pub user_id: String,
}

impl SlotUserPath {
    /// Parse slot_id as Snowflake
    pub fn slot_id(&self) -> Result<Snowflake, ApiError> {
        self.slot_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid slot_id format"))
    }

    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
