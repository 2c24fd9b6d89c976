//! Service context - dependency container for services
//!
//! Holds all repositories, the per-member lock registry, and other
//! dependencies needed by services.

use std::sync::Arc;

use escala_common::auth::JwtService;
use escala_core::traits::{
    AssignmentRepository, MinistryRepository, SlotInviteRepository, SlotRepository, UserRepository,
};
use escala_core::{Snowflake, SnowflakeGenerator};
use escala_db::PgPool;

use super::locks::MemberLocks;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The per-member lock registry used by conflict-gated operations
/// - JWT service for the identity boundary
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (health checks; repositories hold their own clones)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    ministry_repo: Arc<dyn MinistryRepository>,
    slot_repo: Arc<dyn SlotRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    invite_repo: Arc<dyn SlotInviteRepository>,

    // Concurrency
    member_locks: Arc<MemberLocks>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        ministry_repo: Arc<dyn MinistryRepository>,
        slot_repo: Arc<dyn SlotRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        invite_repo: Arc<dyn SlotInviteRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            ministry_repo,
            slot_repo,
            assignment_repo,
            invite_repo,
            member_locks: Arc::new(MemberLocks::new()),
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the ministry repository
    pub fn ministry_repo(&self) -> &dyn MinistryRepository {
        self.ministry_repo.as_ref()
    }

    /// Get the slot repository
    pub fn slot_repo(&self) -> &dyn SlotRepository {
        self.slot_repo.as_ref()
    }

    /// Get the assignment repository
    pub fn assignment_repo(&self) -> &dyn AssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the slot invite repository
    pub fn invite_repo(&self) -> &dyn SlotInviteRepository {
        self.invite_repo.as_ref()
    }

    // === Concurrency ===

    /// Get the per-member lock registry
    pub fn member_locks(&self) -> &MemberLocks {
        self.member_locks.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("member_locks", &self.member_locks)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    ministry_repo: Option<Arc<dyn MinistryRepository>>,
    slot_repo: Option<Arc<dyn SlotRepository>>,
    assignment_repo: Option<Arc<dyn AssignmentRepository>>,
    invite_repo: Option<Arc<dyn SlotInviteRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            ministry_repo: None,
            slot_repo: None,
            assignment_repo: None,
            invite_repo: None,
            jwt_service: None,
            snowflake_generator: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn ministry_repo(mut self, repo: Arc<dyn MinistryRepository>) -> Self {
        self.ministry_repo = Some(repo);
        self
    }

    pub fn slot_repo(mut self, repo: Arc<dyn SlotRepository>) -> Self {
        self.slot_repo = Some(repo);
        self
    }

    pub fn assignment_repo(mut self, repo: Arc<dyn AssignmentRepository>) -> Self {
        self.assignment_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn SlotInviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.ministry_repo.ok_or_else(|| ServiceError::validation("ministry_repo is required"))?,
            self.slot_repo.ok_or_else(|| ServiceError::validation("slot_repo is required"))?,
            self.assignment_repo.ok_or_else(|| ServiceError::validation("assignment_repo is required"))?,
            self.invite_repo.ok_or_else(|| ServiceError::validation("invite_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator.ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
