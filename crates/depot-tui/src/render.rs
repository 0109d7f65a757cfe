//! Top-level frame composition.
//!
//! Layout: one header line, the dashboard body, one footer line of key
//! hints. Toasts and the active overlay are drawn last so they sit on top.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::dashboard::render_dashboard;
use crate::features::toast::render_toasts;
use crate::state::AppState;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(app, frame, rows[0]);
    render_dashboard(frame, rows[1], &app.tui);
    render_footer(app, frame, rows[2]);

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area, &app.tui);
    }
    render_toasts(frame, area, &app.tui.toasts, Instant::now());
}

fn render_header(app: &AppState, frame: &mut Frame, area: ratatui::layout::Rect) {
    let mut spans = vec![Span::styled(
        " depot ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    match &app.tui.session {
        Some(session) => spans.push(Span::styled(
            format!("({})", session.user.username),
            Style::default().fg(Color::DarkGray),
        )),
        None => spans.push(Span::styled(
            "(not logged in)",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if app.tui.tasks.is_any_running() {
        let spinner = SPINNER_FRAMES[app.tui.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::raw(" "));
        spans.push(Span::styled(spinner, Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: ratatui::layout::Rect) {
    let logout_or_login = if app.tui.session.is_some() {
        "l log out"
    } else {
        "l log in"
    };
    let hints = format!(" r refresh \u{2022} {logout_or_login} \u{2022} q quit");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
