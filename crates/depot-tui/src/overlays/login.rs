use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{
    InputHint, calculate_overlay_area, render_hints, render_input_line, render_overlay_container,
};
use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Password,
}

/// Credential prompt. Opened at startup without a stored session, on demand
/// with `l`, and whenever the session expires mid-use.
#[derive(Debug)]
pub struct LoginState {
    username: String,
    password: String,
    focus: Field,
    pub error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: Field::Username,
            error: None,
        }
    }
}

impl LoginState {
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Dismissable only while a session is still live; otherwise the
            // dashboard behind has nothing to show.
            KeyCode::Esc => {
                if tui.session.is_some() {
                    OverlayUpdate::close()
                } else {
                    OverlayUpdate::stay()
                }
            }
            KeyCode::Char('c') if ctrl => OverlayUpdate::close().with_ui_effects(vec![UiEffect::Quit]),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = match self.focus {
                    Field::Username => Field::Password,
                    Field::Password => Field::Username,
                };
                OverlayUpdate::stay()
            }
            KeyCode::Enter => self.submit(tui),
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.active_field_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    fn submit(&mut self, tui: &TuiState) -> OverlayUpdate {
        if tui.tasks.login.is_running() {
            return OverlayUpdate::stay();
        }
        if depot_core::validate::is_blank(&self.username)
            || depot_core::validate::is_blank(&self.password)
        {
            self.error = Some("Username and password are required.".to_string());
            return OverlayUpdate::stay();
        }

        self.error = None;
        // The reducer claims the task id and marks the slot running; the
        // overlay only describes the work.
        OverlayUpdate::stay().with_ui_effects(vec![UiEffect::SpawnLogin {
            task: None,
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }])
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let popup = calculate_overlay_area(area, 46, 9);
        let body = render_overlay_container(frame, popup, "Log in", Color::Cyan);

        render_input_line(
            frame,
            Rect::new(body.x, body.y + 1, body.width, 1),
            "Username:",
            &self.username,
            self.focus == Field::Username,
            false,
        );
        render_input_line(
            frame,
            Rect::new(body.x, body.y + 3, body.width, 1),
            "Password:",
            &self.password,
            self.focus == Field::Password,
            true,
        );

        let status_area = Rect::new(body.x, body.y + 5, body.width, 1);
        if tui.tasks.login.is_running() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Logging in...",
                    Style::default().fg(Color::DarkGray),
                ))),
                status_area,
            );
        } else if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(Color::Red),
                ))),
                status_area,
            );
        }

        render_hints(
            frame,
            body,
            &[
                InputHint::new("enter", "log in"),
                InputHint::new("tab", "switch field"),
                InputHint::new("ctrl+c", "quit"),
            ],
            Color::Cyan,
        );
    }
}
