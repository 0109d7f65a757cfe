//! Effects produced by the reducer and executed by the runtime.
//!
//! The reducer never performs I/O; it describes the work here and the
//! runtime spawns it. Overlays emit task-bearing effects with `task: None`;
//! the reducer claims an id (and the task slot) before the effect reaches
//! the runtime, so an effect that still carries `None` is dropped.

use crate::common::TaskId;

#[derive(Debug, Clone)]
pub enum UiEffect {
    Quit,
    /// Fetch the dashboard aggregates (summary, low stock).
    LoadDashboard { task: Option<TaskId> },
    /// Authenticate and persist the session on success.
    SpawnLogin {
        task: Option<TaskId>,
        username: String,
        password: String,
    },
    /// Clear the persisted session. State was already updated by the reducer.
    Logout,
}
