//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header. The
//! token carries the member's id and binary role; the identity subsystem
//! that issues tokens lives outside this service.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use escala_core::{Role, Snowflake};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: Snowflake,
    /// Role from the JWT token
    pub role: Role,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Snowflake, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Check if the caller is an administrator
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fail unless the caller is an administrator
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::forbidden())
        }
    }

    /// Fail unless the caller is the target member or an administrator
    pub fn require_self_or_admin(&self, target: Snowflake) -> Result<(), ApiError> {
        if self.user_id == target || self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::forbidden())
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(user_id, claims.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_guard() {
        let admin = AuthUser::new(Snowflake::new(1), Role::Admin);
        let member = AuthUser::new(Snowflake::new(2), Role::Member);

        assert!(admin.require_admin().is_ok());
        assert!(member.require_admin().is_err());
    }

    #[test]
    fn test_self_or_admin_guard() {
        let member = AuthUser::new(Snowflake::new(2), Role::Member);

        assert!(member.require_self_or_admin(Snowflake::new(2)).is_ok());
        assert!(member.require_self_or_admin(Snowflake::new(3)).is_err());

        let admin = AuthUser::new(Snowflake::new(1), Role::Admin);
        assert!(admin.require_self_or_admin(Snowflake::new(3)).is_ok());
    }
}
