//! Application state.
//!
//! ```text
//! AppState
//! ├── tui: TuiState (data the reducer and render read every frame)
//! │   ├── config, session
//! │   ├── dashboard: DashboardState
//! │   ├── toasts: ToastStack
//! │   ├── tasks: Tasks (one slot per async task kind)
//! │   └── task_seq: TaskSeq (async task id generator)
//! └── overlay: Option<Overlay> (modal input capture)
//! ```
//!
//! The overlay sits outside `TuiState` so key handlers can mutate the
//! overlay while reading the rest of the state.

use depot_core::config::Config;
use depot_types::Session;

use crate::common::{TaskSeq, Tasks};
use crate::features::dashboard::DashboardState;
use crate::features::toast::ToastStack;
use crate::overlays::{LoginState, Overlay};

pub struct TuiState {
    pub config: Config,
    /// Mirror of the stored session. Cleared on logout and expiry.
    pub session: Option<Session>,
    pub dashboard: DashboardState,
    pub toasts: ToastStack,
    pub tasks: Tasks,
    pub task_seq: TaskSeq,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Starts on the login overlay when no session is stored.
    pub fn new(config: Config, session: Option<Session>) -> Self {
        let overlay = if session.is_none() {
            Some(Overlay::Login(LoginState::default()))
        } else {
            None
        };
        Self {
            tui: TuiState {
                config,
                session,
                dashboard: DashboardState::default(),
                toasts: ToastStack::default(),
                tasks: Tasks::default(),
                task_seq: TaskSeq::default(),
                spinner_frame: 0,
                should_quit: false,
            },
            overlay,
        }
    }
}
