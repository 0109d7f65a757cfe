//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{UiError, UiEvent};
use crate::features::toast::Toast;
use crate::overlays::{ConfirmState, LoginState, Overlay, OverlayTransition};
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            app.tui.toasts.prune(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskCompleted { kind, id, result } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(id);
            if ok { update(app, *result) } else { vec![] }
        }
        UiEvent::DashboardLoaded(result) => handle_dashboard_loaded(app, result),
        UiEvent::LoginCompleted(result) => handle_login_completed(app, result),
    }
}

fn handle_dashboard_loaded(
    app: &mut AppState,
    result: Result<crate::features::dashboard::DashboardData, UiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(data) => {
            // A logout may have raced the fetch; stale data is dropped.
            if app.tui.session.is_some() {
                app.tui.dashboard.data = Some(data);
            }
        }
        Err(UiError::SessionExpired) => expire_session(app),
        Err(UiError::Other(message)) => {
            app.tui.toasts.push(Toast::error(message));
        }
    }
    vec![]
}

fn handle_login_completed(
    app: &mut AppState,
    result: Result<depot_types::Session, UiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(session) => {
            let username = session.user.username.clone();
            app.tui.session = Some(session);
            if matches!(app.overlay, Some(Overlay::Login(_))) {
                app.overlay = None;
            }
            app.tui
                .toasts
                .push(Toast::success(format!("Logged in as {username}")));
            claim_and_start_refresh(&mut app.tui)
                .map(|effect| vec![effect])
                .unwrap_or_default()
        }
        Err(error) => {
            let message = error.to_string();
            match app.overlay.as_mut().and_then(Overlay::as_login_mut) {
                Some(login) => login.set_error(message),
                None => app.overlay = Some(Overlay::Login(LoginState::with_error(message))),
            }
            vec![]
        }
    }
}

/// The stored session was rejected by the backend. The client copy is
/// already cleared by the API layer; here the UI follows suit.
fn expire_session(app: &mut AppState) {
    app.tui.session = None;
    app.tui.dashboard.data = None;
    app.tui
        .toasts
        .push(Toast::error("Session expired. Please log in again."));
    if !matches!(app.overlay, Some(Overlay::Login(_))) {
        app.overlay = Some(Overlay::Login(LoginState::default()));
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if app.overlay.is_some() {
        return handle_overlay_key(app, key);
    }
    handle_global_key(app, key)
}

fn handle_overlay_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(overlay) = app.overlay.as_mut() else {
        return vec![];
    };
    let overlay_update = overlay.handle_key(&app.tui, key);
    if matches!(overlay_update.transition, OverlayTransition::Close) {
        app.overlay = None;
    }
    finalize_effects(app, overlay_update.effects)
}

fn handle_global_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.tui.should_quit = true;
            vec![]
        }
        KeyCode::Char('c') if ctrl => {
            app.tui.should_quit = true;
            vec![]
        }
        KeyCode::Char('r') => match claim_and_start_refresh(&mut app.tui) {
            Some(effect) => vec![effect],
            None => vec![],
        },
        KeyCode::Char('l') => {
            if app.tui.session.is_some() {
                app.overlay = Some(Overlay::Confirm(ConfirmState::new(
                    "Log out?",
                    vec![UiEffect::Logout],
                )));
            } else {
                app.overlay = Some(Overlay::Login(LoginState::default()));
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Claims the refresh task slot if it is free and a session exists.
fn claim_and_start_refresh(tui: &mut TuiState) -> Option<UiEffect> {
    if tui.session.is_none() {
        tui.toasts.push(Toast::warning("Log in first."));
        return None;
    }
    if tui.tasks.refresh.is_running() {
        return None;
    }
    let id = tui.task_seq.next_id();
    tui.tasks.refresh.on_started(id);
    Some(UiEffect::LoadDashboard { task: Some(id) })
}

/// Post-processes effects coming out of overlays: claims task ids for
/// task-bearing effects and applies reducer-side state changes for effects
/// the runtime alone cannot express (logout).
fn finalize_effects(app: &mut AppState, effects: Vec<UiEffect>) -> Vec<UiEffect> {
    let mut out = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            UiEffect::SpawnLogin {
                task: None,
                username,
                password,
            } => {
                if app.tui.tasks.login.is_running() {
                    continue;
                }
                let id = app.tui.task_seq.next_id();
                app.tui.tasks.login.on_started(id);
                out.push(UiEffect::SpawnLogin {
                    task: Some(id),
                    username,
                    password,
                });
            }
            UiEffect::LoadDashboard { task: None } => {
                if let Some(effect) = claim_and_start_refresh(&mut app.tui) {
                    out.push(effect);
                }
            }
            UiEffect::Logout => {
                app.tui.session = None;
                app.tui.dashboard.data = None;
                app.tui.tasks.refresh.clear();
                app.tui.toasts.push(Toast::info("Logged out."));
                app.overlay = Some(Overlay::Login(LoginState::default()));
                out.push(UiEffect::Logout);
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use depot_core::config::Config;
    use depot_types::{Session, UserProfile};

    use super::*;
    use crate::features::dashboard::DashboardData;

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user: UserProfile {
                id: 7,
                username: "ana".to_string(),
            },
        }
    }

    fn logged_in() -> AppState {
        AppState::new(Config::default(), Some(session()))
    }

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    #[test]
    fn starts_on_login_overlay_without_session() {
        let app = AppState::new(Config::default(), None);
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));
    }

    #[test]
    fn refresh_key_claims_the_task_slot_once() {
        let mut app = logged_in();

        let effects = update(&mut app, press(KeyCode::Char('r')));
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            effects[0],
            UiEffect::LoadDashboard { task: Some(_) }
        ));
        assert!(app.tui.tasks.refresh.is_running());

        // Second press while in flight is a no-op.
        let effects = update(&mut app, press(KeyCode::Char('r')));
        assert!(effects.is_empty());
    }

    #[test]
    fn dashboard_load_success_stores_data() {
        let mut app = logged_in();
        let effects = update(&mut app, press(KeyCode::Char('r')));
        let UiEffect::LoadDashboard { task: Some(id) } = effects[0] else {
            panic!("expected a load effect");
        };

        let done = UiEvent::TaskCompleted {
            kind: crate::common::TaskKind::Refresh,
            id,
            result: Box::new(UiEvent::DashboardLoaded(Ok(DashboardData::default()))),
        };
        let effects = update(&mut app, done);
        assert!(effects.is_empty());
        assert!(!app.tui.tasks.refresh.is_running());
        assert!(app.tui.dashboard.data.is_some());
    }

    #[test]
    fn session_expiry_drops_session_and_reopens_login() {
        let mut app = logged_in();
        let effects = update(&mut app, press(KeyCode::Char('r')));
        let UiEffect::LoadDashboard { task: Some(id) } = effects[0] else {
            panic!("expected a load effect");
        };

        let done = UiEvent::TaskCompleted {
            kind: crate::common::TaskKind::Refresh,
            id,
            result: Box::new(UiEvent::DashboardLoaded(Err(UiError::SessionExpired))),
        };
        update(&mut app, done);

        assert!(app.tui.session.is_none());
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));
        assert_eq!(app.tui.toasts.len(), 1);
    }

    #[test]
    fn failed_refresh_keeps_previous_data() {
        let mut app = logged_in();
        app.tui.dashboard.data = Some(DashboardData::default());

        let effects = update(&mut app, press(KeyCode::Char('r')));
        let UiEffect::LoadDashboard { task: Some(id) } = effects[0] else {
            panic!("expected a load effect");
        };
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: crate::common::TaskKind::Refresh,
                id,
                result: Box::new(UiEvent::DashboardLoaded(Err(UiError::Other(
                    "boom".to_string(),
                )))),
            },
        );

        assert!(app.tui.dashboard.data.is_some());
        assert_eq!(app.tui.toasts.len(), 1);
    }

    #[test]
    fn login_success_closes_overlay_and_triggers_refresh() {
        let mut app = AppState::new(Config::default(), None);
        // Claim the slot the way finalize_effects would.
        let id = app.tui.task_seq.next_id();
        app.tui.tasks.login.on_started(id);

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: crate::common::TaskKind::Login,
                id,
                result: Box::new(UiEvent::LoginCompleted(Ok(session()))),
            },
        );

        assert!(app.overlay.is_none());
        assert!(app.tui.session.is_some());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadDashboard { task: Some(_) }]
        ));
    }

    #[test]
    fn login_failure_surfaces_error_in_overlay() {
        let mut app = AppState::new(Config::default(), None);
        let id = app.tui.task_seq.next_id();
        app.tui.tasks.login.on_started(id);

        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: crate::common::TaskKind::Login,
                id,
                result: Box::new(UiEvent::LoginCompleted(Err(UiError::Other(
                    "invalid username or password".to_string(),
                )))),
            },
        );

        let Some(Overlay::Login(login)) = &app.overlay else {
            panic!("login overlay should stay open");
        };
        assert_eq!(
            login.error.as_deref(),
            Some("invalid username or password")
        );
    }

    #[test]
    fn logout_flow_needs_confirmation() {
        let mut app = logged_in();

        update(&mut app, press(KeyCode::Char('l')));
        assert!(matches!(app.overlay, Some(Overlay::Confirm(_))));

        let effects = update(&mut app, press(KeyCode::Char('y')));
        assert!(matches!(effects.as_slice(), [UiEffect::Logout]));
        assert!(app.tui.session.is_none());
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));
    }

    #[test]
    fn stale_task_completion_is_dropped() {
        let mut app = logged_in();
        let stale = app.tui.task_seq.next_id();

        let effects = update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: crate::common::TaskKind::Refresh,
                id: stale,
                result: Box::new(UiEvent::DashboardLoaded(Ok(DashboardData::default()))),
            },
        );
        assert!(effects.is_empty());
        assert!(app.tui.dashboard.data.is_none());
    }

    #[test]
    fn quit_keys_set_the_flag() {
        let mut app = logged_in();
        update(&mut app, press(KeyCode::Char('q')));
        assert!(app.tui.should_quit);
    }

    #[test]
    fn refresh_without_session_warns_instead_of_fetching() {
        let mut app = logged_in();
        app.tui.session = None;
        app.overlay = None;

        let effects = update(&mut app, press(KeyCode::Char('r')));
        assert!(effects.is_empty());
        assert_eq!(app.tui.toasts.len(), 1);
    }
}
