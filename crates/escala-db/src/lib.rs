//! # escala-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `escala-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the same-day uniqueness backstop
//!
//! ## Usage
//!
//! ```rust,ignore
//! use escala_db::pool::{create_pool, DatabaseConfig};
//! use escala_db::repositories::PgSlotRepository;
//! use escala_core::traits::SlotRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     escala_db::run_migrations(&pool).await?;
//!     let slot_repo = PgSlotRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAssignmentRepository, PgMinistryRepository, PgSlotInviteRepository, PgSlotRepository,
    PgUserRepository,
};
