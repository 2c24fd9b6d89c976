//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and typed path
//! parameters.

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{InviteIdPath, MinistryIdPath, SlotIdPath, SlotUserPath};
pub use validated::ValidatedJson;
