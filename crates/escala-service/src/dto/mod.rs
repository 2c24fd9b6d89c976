//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateMinistryRequest, CreateSlotRequest, ScheduleAction, UpdateMinistryRequest,
    UpdateSlotRequest,
};
pub use responses::{
    AcceptInviteResponse, AssignmentResponse, ConflictProbeResponse, HealthResponse,
    InviteResponse, MinistryResponse, ReadinessResponse, SlotResponse, SlotWithCountResponse,
};
