use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use super::state::{ToastPhase, ToastStack};

const TOAST_WIDTH: u16 = 44;

/// Draws the toast stack in the top-right corner, oldest at the top.
/// Fading toasts are dimmed. Drawn after everything else so toasts sit on
/// top of the dashboard and overlays alike.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastStack, now: Instant) {
    if toasts.is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width + 1);

    for (row, (toast, phase)) in toasts.iter_live(now).enumerate() {
        let y = area.y + 1 + row as u16;
        if y >= area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 1);
        frame.render_widget(Clear, rect);

        let mut style = Style::default().fg(toast.severity.color());
        if phase == ToastPhase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }

        let text = format!(" [{}] {} ", toast.severity.label(), toast.message);
        let line = Line::from(Span::styled(clip(&text, width as usize), style));
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
