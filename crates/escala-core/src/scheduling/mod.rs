//! Scheduling rules - same-day conflict detection

mod conflict;

pub use conflict::{find_same_day_conflict, AssignedSlot, ConflictingSlot, SameDayConflict};
