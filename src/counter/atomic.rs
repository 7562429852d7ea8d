/*!
 * Atomic Counter
 * Lock-free counter over a single atomic cell
 */

use super::traits::{Counter, Discipline};
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counter
///
/// Each increment is an individual `fetch_add`; the total order on the
/// atomic cell is the only thing guaranteeing the exact final count. No
/// compound operation is protected - two callers interleave freely between
/// increments.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicU64,
}

impl AtomicCounter {
    /// Create a zero-initialized counter
    pub fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }
}

impl Counter for AtomicCounter {
    fn increment_by(&self, n: usize) {
        for _ in 0..n {
            self.value.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn read(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }

    fn discipline(&self) -> Discipline {
        Discipline::LockFree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = AtomicCounter::new();
        assert_eq!(counter.read(), 0);
        assert_eq!(counter.discipline(), Discipline::LockFree);
    }

    #[test]
    fn test_increment_batch() {
        let counter = AtomicCounter::new();
        counter.increment_by(1000);
        counter.increment_by(1);
        assert_eq!(counter.read(), 1001);
    }
}
