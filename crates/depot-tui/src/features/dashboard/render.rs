use depot_core::format;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::TuiState;

/// Draws the dashboard body: inventory totals and low-stock alerts side by
/// side above the per-category breakdown.
pub fn render_dashboard(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let Some(data) = &tui.dashboard.data else {
        render_placeholder(frame, area, tui);
        return;
    };

    let rows = Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).split(area);
    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let locale = &tui.config.locale;
    let summary = &data.summary;

    let totals = vec![
        stat_line(
            "Products",
            format::format_number(locale, summary.total_products as f64),
        ),
        stat_line(
            "Units",
            format::format_number(locale, summary.total_units as f64),
        ),
        stat_line(
            "Low stock",
            format::format_number(locale, summary.low_stock_count as f64),
        ),
        stat_line(
            "Out of stock",
            format::format_number(locale, summary.out_of_stock_count as f64),
        ),
    ];
    frame.render_widget(
        Paragraph::new(totals).block(titled_block("Inventory")),
        top[0],
    );

    let mut alerts: Vec<Line> = data
        .low_stock
        .iter()
        .take(4)
        .map(|item| {
            Line::from(vec![
                Span::styled(
                    format!("{:>4} ", item.quantity),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(item.name.clone()),
            ])
        })
        .collect();
    if alerts.is_empty() {
        alerts.push(Line::from(Span::styled(
            "no alerts",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(alerts).block(titled_block("Low stock")),
        top[1],
    );

    let mut category_lines: Vec<Line> = summary
        .by_category
        .iter()
        .map(|(category, count)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<24}", clip(category, 24)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "{} products",
                    format::format_number(locale, *count as f64),
                )),
            ])
        })
        .collect();
    if category_lines.is_empty() {
        category_lines.push(Line::from(Span::styled(
            "no categories yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(category_lines).block(titled_block("By category")),
        rows[1],
    );
}

fn render_placeholder(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let message = if tui.session.is_none() {
        "Not logged in. Press l to log in."
    } else if tui.tasks.refresh.is_running() {
        "Loading dashboard..."
    } else {
        "No data yet. Press r to refresh."
    };
    let para = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::DarkGray),
    )))
    .block(titled_block("Dashboard"));
    frame.render_widget(para, area);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(Color::DarkGray))
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<14}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
