//! # escala-service
//!
//! Application layer containing the assignment engine, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AcceptInviteResponse, AssignmentResponse, ConflictProbeResponse, CreateMinistryRequest,
    CreateSlotRequest, HealthResponse, InviteResponse, MinistryResponse, ReadinessResponse,
    ScheduleAction, SlotResponse, SlotWithCountResponse, UpdateMinistryRequest, UpdateSlotRequest,
};
pub use services::{
    MemberLocks, MinistryService, ScheduleService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SlotService,
};
