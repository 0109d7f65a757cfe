//! Events consumed by the reducer.
//!
//! Terminal input and async task results all funnel into `UiEvent`; the
//! runtime collects them and feeds them to `update::update` one at a time.

use std::fmt;

use depot_core::api::ApiError;
use depot_types::Session;

use crate::common::{TaskId, TaskKind};
use crate::features::dashboard::DashboardData;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer. Drives the spinner and toast expiry.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An async task finished; the inner event carries its result.
    ///
    /// Stale completions (id no longer active) are dropped by the reducer.
    TaskCompleted {
        kind: TaskKind,
        id: TaskId,
        result: Box<UiEvent>,
    },
    DashboardLoaded(Result<DashboardData, UiError>),
    LoginCompleted(Result<Session, UiError>),
}

/// Task error as shown to the user.
///
/// Session expiry is kept distinct because the reducer reacts to it
/// structurally (drop the session, reopen the login overlay) rather than
/// just showing a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    SessionExpired,
    Other(String),
}

impl From<ApiError> for UiError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::SessionExpired => UiError::SessionExpired,
            other => UiError::Other(other.to_string()),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::SessionExpired => write!(f, "Session expired. Please log in again."),
            UiError::Other(message) => write!(f, "{message}"),
        }
    }
}
