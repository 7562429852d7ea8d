/*!
 * Counter Traits
 * Common interface over the synchronization disciplines
 */

use serde::{Deserialize, Serialize};

/// Synchronization discipline tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Mutual exclusion around the read-modify-write sequence
    Locked,
    /// Hardware atomic read-modify-write, no lock involved
    LockFree,
}

/// Shared counter with a selectable synchronization discipline
///
/// Both implementations guarantee the same postcondition: once every
/// concurrent caller has finished, `read` equals the total increment count
/// exactly, with no lost updates. They differ only in how that guarantee is
/// enforced, which is what the contention driver compares.
pub trait Counter: Send + Sync {
    /// Apply `n` increments on the calling thread
    fn increment_by(&self, n: usize);

    /// Current value
    fn read(&self) -> u64;

    /// Discipline implemented by this counter
    fn discipline(&self) -> Discipline;
}
