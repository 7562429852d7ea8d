/*!
 * Contention Driver
 * Runs identical workloads against both disciplines and reports the results
 */

use super::atomic::AtomicCounter;
use super::locked::LockedCounter;
use super::traits::{Counter, Discipline};
use log::debug;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Instant;

/// Outcome of one contention run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContentionReport {
    pub discipline: Discipline,
    pub callers: usize,
    pub increments: usize,
    pub total: u64,
    pub elapsed_micros: u64,
}

/// Spawn `callers` threads, each applying `increments` increments, and
/// return the final value once all have joined
///
/// The counter is owned by the caller and passed by reference - there is no
/// process-wide shared state. For both disciplines the result is exactly
/// `callers * increments`; interleaving between callers is unspecified.
pub fn run_contention<C: Counter + ?Sized>(counter: &C, callers: usize, increments: usize) -> u64 {
    thread::scope(|s| {
        for _ in 0..callers {
            s.spawn(|| counter.increment_by(increments));
        }
    });

    let total = counter.read();
    debug!(
        "Contention run ({:?}): {} callers x {} increments -> {}",
        counter.discipline(),
        callers,
        increments,
        total
    );
    total
}

/// Run the same workload against both disciplines
///
/// Reports correctness (`total`) and wall time per discipline. Which
/// discipline is faster depends on the workload and core count; only the
/// exact final count is guaranteed.
pub fn compare(callers: usize, increments: usize) -> Vec<ContentionReport> {
    vec![
        measure(&LockedCounter::new(), callers, increments),
        measure(&AtomicCounter::new(), callers, increments),
    ]
}

fn measure<C: Counter + ?Sized>(counter: &C, callers: usize, increments: usize) -> ContentionReport {
    let start = Instant::now();
    let total = run_contention(counter, callers, increments);

    ContentionReport {
        discipline: counter.discipline(),
        callers,
        increments,
        total,
        elapsed_micros: start.elapsed().as_micros() as u64,
    }
}
