use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::render_utils::{
    InputHint, calculate_overlay_area, render_hints, render_overlay_container,
};
use super::OverlayUpdate;
use crate::effects::UiEffect;

/// Yes/no prompt. The effects it carries run only on confirmation.
#[derive(Debug)]
pub struct ConfirmState {
    message: String,
    effects: Vec<UiEffect>,
}

impl ConfirmState {
    pub fn new(message: impl Into<String>, effects: Vec<UiEffect>) -> Self {
        Self {
            message: message.into(),
            effects,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                OverlayUpdate::close().with_ui_effects(std::mem::take(&mut self.effects))
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = calculate_overlay_area(area, 40, 6);
        let body = render_overlay_container(frame, popup, "Confirm", Color::Yellow);

        frame.render_widget(
            Paragraph::new(Line::from(self.message.clone())),
            Rect::new(body.x, body.y + 1, body.width, 1),
        );
        render_hints(
            frame,
            body,
            &[InputHint::new("y", "confirm"), InputHint::new("n", "cancel")],
            Color::Yellow,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn confirm_releases_effects() {
        let mut state = ConfirmState::new("Log out?", vec![UiEffect::Logout]);
        let update = state.handle_key(key(KeyCode::Char('y')));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(update.effects.len(), 1);
        assert!(matches!(update.effects[0], UiEffect::Logout));
    }

    #[test]
    fn cancel_discards_effects() {
        let mut state = ConfirmState::new("Log out?", vec![UiEffect::Logout]);
        let update = state.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn other_keys_keep_the_prompt_open() {
        let mut state = ConfirmState::new("Log out?", vec![UiEffect::Logout]);
        let update = state.handle_key(key(KeyCode::Char('x')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }
}
