//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AssignmentRepository, MinistryRepository, RepoResult, SlotInviteRepository, SlotRepository,
    UserRepository,
};
