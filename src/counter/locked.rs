/*!
 * Locked Counter
 * Mutex-guarded counter: concurrent callers serialize on the lock
 */

use super::traits::{Counter, Discipline};
use parking_lot::Mutex;

/// Counter protected by mutual exclusion
///
/// `increment_by` holds the lock across the whole batch, so callers
/// serialize batch-by-batch rather than increment-by-increment. Reads take
/// the lock too; an unlocked read would race with in-flight writers.
#[derive(Debug, Default)]
pub struct LockedCounter {
    value: Mutex<u64>,
}

impl LockedCounter {
    /// Create a zero-initialized counter
    pub fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }
}

impl Counter for LockedCounter {
    fn increment_by(&self, n: usize) {
        let mut value = self.value.lock();
        for _ in 0..n {
            *value += 1;
        }
    }

    fn read(&self) -> u64 {
        *self.value.lock()
    }

    fn discipline(&self) -> Discipline {
        Discipline::Locked
    }
}
