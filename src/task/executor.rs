/*!
 * Task Executor
 * Fan-out dispatch with a completion barrier
 */

use super::types::{Task, TaskState};
use crate::core::types::TaskId;
use dashmap::DashMap;
use log::{error, info};
use std::sync::Arc;
use std::thread;

/// Drives batches of tasks to completion
///
/// Every task in a batch runs on its own thread; `execute_all` returns only
/// after the whole batch has reached a terminal state. Terminal outcomes are
/// recorded in a shared registry so they can be inspected after the barrier
/// releases.
pub struct TaskExecutor {
    outcomes: Arc<DashMap<TaskId, TaskState>>,
}

impl TaskExecutor {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(DashMap::new()),
        }
    }

    /// Run every task concurrently and block until all are terminal
    ///
    /// Dispatch is unordered. A failing task is recorded as `Failed` and
    /// never aborts or cancels its siblings; the barrier itself has no error
    /// path. A work function that never returns blocks the barrier
    /// indefinitely - there is no built-in timeout.
    pub fn execute_all<P: Send>(&self, tasks: &mut [Task<P>]) {
        let batch = tasks.len();
        info!("Dispatching batch of {} tasks", batch);

        thread::scope(|s| {
            for task in tasks.iter_mut() {
                let outcomes = Arc::clone(&self.outcomes);
                s.spawn(move || {
                    let id = task.id();
                    if let Err(e) = task.run() {
                        error!("Task {} failed: {}", id, e);
                    }
                    outcomes.insert(id, task.state());
                });
            }
            // Scope exit joins every spawned thread: the completion barrier
        });

        info!("Batch of {} tasks reached terminal state", batch);
    }

    /// Recorded terminal outcome for a task, if it has been executed
    pub fn outcome(&self, id: TaskId) -> Option<TaskState> {
        self.outcomes.get(&id).map(|entry| *entry.value())
    }

    /// Count of tasks recorded as `Completed`
    pub fn completed_count(&self) -> usize {
        self.count_state(TaskState::Completed)
    }

    /// Count of tasks recorded as `Failed`
    pub fn failed_count(&self) -> usize {
        self.count_state(TaskState::Failed)
    }

    /// Snapshot of all recorded outcomes
    pub fn outcomes(&self) -> Vec<(TaskId, TaskState)> {
        self.outcomes
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect()
    }

    fn count_state(&self, state: TaskState) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| *entry.value() == state)
            .count()
    }
}

impl Clone for TaskExecutor {
    fn clone(&self) -> Self {
        Self {
            outcomes: Arc::clone(&self.outcomes),
        }
    }
}

impl Default for TaskExecutor {
    fn default() -> Self {
        Self::new()
    }
}
