pub mod category_pane;
pub mod form;
pub mod status_bar;

use crate::app::AppState;
use crate::app::mode::Mode;
use crate::category::CATEGORIES;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub const EMPTY_STATE: &str = "No priorities added yet—create one to get started!";
pub const NO_SUBTASKS: &str = "No subtasks yet.";

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Category panes
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    for idx in 0..CATEGORIES.len() {
        category_pane::render(f, state, panes[idx], idx);
    }

    status_bar::render(f, state, chunks[1]);

    if state.mode == Mode::Form {
        form::render(f, state);
    }

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default()
        .fg(state.theme.accent)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default()
        .fg(state.theme.priority_label)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(state.theme.muted);

    let entries: &[(&str, &str)] = &[
        ("", "── Navigation ──"),
        ("j / ↓", "Move cursor down"),
        ("k / ↑", "Move cursor up"),
        ("Tab / l / h", "Switch category"),
        ("g / G", "Jump to top / bottom"),
        ("", "── Checklist ──"),
        ("Space / x", "Toggle done"),
        ("a / n", "New priority"),
        ("d", "Delete priority (asks first)"),
        ("", "── Form ──"),
        ("Tab / Shift+Tab", "Next / previous field"),
        ("Ctrl+n", "Add another subtask field"),
        ("Enter", "Add the priority"),
        ("Esc", "Close the form"),
        ("", "── Other ──"),
        ("?", "Toggle this help"),
        ("q", "Quit"),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (binding, description) in entries {
        if binding.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {description}"),
                section_style,
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("    {binding:<16}"), key_style),
                Span::styled((*description).to_string(), desc_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Esc or ? to close", dim_style)));

    let area = centered_rect(50, (lines.len() + 2) as u16, f.area());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// A rect centered in `r`, `percent_x` wide and exactly `height` rows tall.
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let width = (r.width * percent_x / 100).max(1);
    Rect::new(
        r.x + (r.width.saturating_sub(width)) / 2,
        r.y + (r.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
