//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. Each one is
//! self-contained: it owns its state, key handler, and render function.
//!
//! - `login.rs`: credential prompt, also shown when a session expires
//! - `confirm.rs`: yes/no confirmation before destructive actions
//! - `render_utils.rs`: shared rendering helpers

pub mod confirm;
pub mod login;
pub mod render_utils;

pub use confirm::ConfirmState;
use crossterm::event::KeyEvent;
pub use login::LoginState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Login(LoginState),
    Confirm(ConfirmState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Login(l) => l.render(frame, area, tui),
            Overlay::Confirm(c) => c.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(l) => l.handle_key(tui, key),
            Overlay::Confirm(c) => c.handle_key(key),
        }
    }

    pub fn as_login_mut(&mut self) -> Option<&mut LoginState> {
        match self {
            Overlay::Login(l) => Some(l),
            Overlay::Confirm(_) => None,
        }
    }
}
