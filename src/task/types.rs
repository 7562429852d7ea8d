/*!
 * Task Types
 * Common types for task execution
 */

use crate::core::types::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Task operation result
pub type TaskResult<T> = Result<T, TaskError>;

/// Task errors
#[derive(Error, Debug, Clone)]
pub enum TaskError {
    #[error("Work failed: {0}")]
    WorkFailed(String),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition { from: TaskState, to: TaskState },
}

/// Task state
///
/// Transitions are one-directional: `Pending -> Running -> Completed | Failed`.
/// A task never re-enters an earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task is created and waiting to be dispatched
    Pending,
    /// Task is currently executing
    Running,
    /// Task finished successfully
    Completed,
    /// Task work reported an error
    Failed,
}

impl TaskState {
    /// Whether the task can no longer change state
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Failed)
    }
}

/// Task metadata snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TaskInfo {
    pub id: TaskId,
    pub state: TaskState,
}

/// Work function executed exactly once by `Task::run`
pub type WorkFn<P> = Box<dyn FnOnce(&P) -> TaskResult<()> + Send + 'static>;

/// A unit of work with an explicit state machine
///
/// The payload is opaque to the toolkit. The state field is mutated only by
/// the thread executing the task; outside readers of a snapshot must
/// tolerate staleness while the task is in flight.
pub struct Task<P> {
    id: TaskId,
    state: TaskState,
    payload: P,
    work: Option<WorkFn<P>>,
}

impl<P> Task<P> {
    /// Create a task in `Pending` with a fresh id
    pub fn new<F>(payload: P, work: F) -> Self
    where
        F: FnOnce(&P) -> TaskResult<()> + Send + 'static,
    {
        Self {
            id: TaskId::next(),
            state: TaskState::Pending,
            payload,
            work: Some(Box::new(work)),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Serializable snapshot of id and state
    pub fn info(&self) -> TaskInfo {
        TaskInfo {
            id: self.id,
            state: self.state,
        }
    }

    /// Drive the task to a terminal state
    ///
    /// Transitions `Pending -> Running`, invokes the work function, then
    /// records `Completed` on success or `Failed` on error (returning the
    /// work error). Calling `run` on a non-`Pending` task fails fast with
    /// `InvalidTransition` and leaves the task untouched.
    pub fn run(&mut self) -> TaskResult<()> {
        let work = match self.work.take() {
            Some(work) if self.state == TaskState::Pending => work,
            _ => {
                return Err(TaskError::InvalidTransition {
                    from: self.state,
                    to: TaskState::Running,
                })
            }
        };

        self.state = TaskState::Running;

        match work(&self.payload) {
            Ok(()) => {
                self.state = TaskState::Completed;
                Ok(())
            }
            Err(e) => {
                self.state = TaskState::Failed;
                Err(e)
            }
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for Task<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("payload", &self.payload)
            .finish()
    }
}
