//! Error handling utilities for repositories

use escala_core::error::DomainError;
use escala_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Return the violated unique constraint's name, if this error is a unique
/// violation. Repositories dispatch on the name because the assignments
/// table carries two distinct backstops with different meanings.
pub fn unique_constraint(e: &SqlxError) -> Option<&str> {
    e.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if unique_constraint(&e).is_some() {
        return on_unique();
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "slot not found" error
pub fn slot_not_found(id: Snowflake) -> DomainError {
    DomainError::SlotNotFound(id)
}

/// Create a "ministry not found" error
pub fn ministry_not_found(id: Snowflake) -> DomainError {
    DomainError::MinistryNotFound(id)
}

/// Create an "invite not found" error
pub fn invite_not_found(id: Snowflake) -> DomainError {
    DomainError::InviteNotFound(id)
}

/// Create an "assignment not found" error
pub fn assignment_not_found() -> DomainError {
    DomainError::AssignmentNotFound
}
