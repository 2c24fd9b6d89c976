//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use escala_common::AppError;
use escala_core::{DomainError, SameDayConflict};
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation (includes schedule conflicts)
    Domain(DomainError),

    /// Application error (auth, validation, etc.)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Borrow the structured same-day conflict payload, if this failure
    /// carries one. The action endpoint uses this to attach the blocking
    /// slot to 409 responses.
    pub fn schedule_conflict(&self) -> Option<&SameDayConflict> {
        match self {
            Self::Domain(e) => e.schedule_conflict(),
            _ => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use escala_core::{ConflictingSlot, Snowflake};

    fn conflict_error() -> ServiceError {
        ServiceError::Domain(DomainError::ScheduleConflict(SameDayConflict {
            conflicting_slot: ConflictingSlot {
                id: Snowflake::new(7),
                title: "Morning shift".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                ministry_title: "Reception".to_string(),
            },
            message: "Already scheduled".to_string(),
        }))
    }

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("Slot", "123");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("Slot not found: 123"));
    }

    #[test]
    fn test_schedule_conflict_maps_to_409_with_payload() {
        let err = conflict_error();
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "SCHEDULE_CONFLICT");
        assert_eq!(
            err.schedule_conflict().unwrap().conflicting_slot.id,
            Snowflake::new(7)
        );
    }

    #[test]
    fn test_non_conflict_errors_carry_no_payload() {
        assert!(ServiceError::not_found("Slot", "1").schedule_conflict().is_none());
        assert!(ServiceError::Domain(DomainError::AlreadyAssigned)
            .schedule_conflict()
            .is_none());
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("capacity must be positive");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::not_found("Ministry", "456");
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 404);
    }
}
