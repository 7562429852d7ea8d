/*!
 * Concord Library
 * Concurrency-coordination toolkit: task fan-out with a completion barrier,
 * dual-discipline shared counters, a close-signaling relay queue, and a
 * pull-based lazy sequence generator
 */

pub mod core;
pub mod counter;
pub mod generator;
pub mod relay;
pub mod task;

// Re-exports
pub use crate::core::types::TaskId;
pub use counter::{
    compare, run_contention, AtomicCounter, ContentionReport, Counter, Discipline, LockedCounter,
};
pub use generator::{fibonacci, LazyGenerator};
pub use relay::{relay, RelayError, RelayReceiver, RelayResult, RelaySender};
pub use task::{Task, TaskError, TaskExecutor, TaskInfo, TaskResult, TaskState, WorkFn};
