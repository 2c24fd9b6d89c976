//! Per-member mutual exclusion
//!
//! Every conflict-gated operation runs its check-then-write sequence while
//! holding the target member's lock, so two operations for the same member
//! cannot interleave between the conflict check and the mutation. Operations
//! for different members never contend. The database's unique indexes remain
//! as the backstop for writers that bypass this process.

use std::sync::Arc;

use dashmap::DashMap;
use escala_core::Snowflake;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-member async locks
#[derive(Default)]
pub struct MemberLocks {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl MemberLocks {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the lock for a member, waiting if another operation for the
    /// same member is in flight. The guard must be held across the whole
    /// check-then-write sequence.
    pub async fn acquire(&self, member_id: Snowflake) -> OwnedMutexGuard<()> {
        // The map guard is dropped before awaiting the mutex
        let lock = {
            let entry = self.locks.entry(member_id.into_inner()).or_default();
            Arc::clone(entry.value())
        };
        lock.lock_owned().await
    }
}

impl std::fmt::Debug for MemberLocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberLocks")
            .field("members", &self.locks.len())
            .finish()
    }
}
