//! Request handlers

pub mod assignments;
pub mod health;
pub mod invites;
pub mod ministries;
pub mod schedule;
pub mod slots;
