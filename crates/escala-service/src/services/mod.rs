//! Application services

mod context;
mod error;
mod locks;
mod ministry;
mod schedule;
mod slot;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use locks::MemberLocks;
pub use ministry::MinistryService;
pub use schedule::ScheduleService;
pub use slot::SlotService;
