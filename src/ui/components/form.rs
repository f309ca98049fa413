use crate::app::AppState;
use crate::app::form::{EditBuffer, FormFocus, FormState};

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::centered_rect;

const TITLE_PLACEHOLDER: &str = "Name this priority";
const DESCRIPTION_PLACEHOLDER: &str = "Describe the intent, rhythm, or why it matters.";
const SUBTASK_PLACEHOLDER: &str = "Supporting action or reminder";
const HINT: &str = "Enter add · Ctrl+n subtask · Tab fields · Esc close";

pub fn render(f: &mut Frame, state: &AppState) {
    let form = &state.form;

    // label + input per field, a label for the subtask block, one line per
    // subtask input, then a blank line and the key hint.
    let content_height = 5 + form.subtask_inputs.len() as u16 + 2;
    let area = centered_rect(60, content_height + 2, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.accent))
        .title(format!(" Add to {} ", state.active_category().title))
        .style(Style::default().bg(state.theme.background));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let label_style = Style::default().fg(state.theme.priority_label);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Priority focus", label_style)));
    lines.push(input_line(
        state,
        &form.title,
        TITLE_PLACEHOLDER,
        form.focus == FormFocus::Title,
    ));
    lines.push(Line::from(Span::styled("Description", label_style)));
    lines.push(input_line(
        state,
        &form.description,
        DESCRIPTION_PLACEHOLDER,
        form.focus == FormFocus::Description,
    ));
    lines.push(Line::from(Span::styled("Subtasks", label_style)));
    for (i, input) in form.subtask_inputs.iter().enumerate() {
        lines.push(input_line(
            state,
            input,
            SUBTASK_PLACEHOLDER,
            form.focus == FormFocus::Subtask(i),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        HINT,
        Style::default().fg(state.theme.muted),
    )));

    f.render_widget(Paragraph::new(lines), inner);

    place_cursor(f, form, inner);
}

fn input_line<'a>(
    state: &AppState,
    buffer: &EditBuffer,
    placeholder: &'a str,
    focused: bool,
) -> Line<'a> {
    let marker_style = if focused {
        Style::default()
            .fg(state.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(state.theme.muted)
    };
    let marker = if focused { "▸ " } else { "  " };

    let content = if buffer.text.is_empty() {
        Span::styled(
            placeholder,
            Style::default()
                .fg(state.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            buffer.text.clone(),
            Style::default().fg(state.theme.foreground),
        )
    };

    Line::from(vec![Span::styled(marker, marker_style), content])
}

/// Put the terminal cursor inside the focused input, after the text before
/// the edit cursor.
fn place_cursor(f: &mut Frame, form: &FormState, inner: Rect) {
    let (line_offset, buffer) = match form.focus {
        FormFocus::Title => (1, &form.title),
        FormFocus::Description => (3, &form.description),
        FormFocus::Subtask(i) => (5 + i as u16, &form.subtask_inputs[i]),
    };

    let x = inner.x + 2 + buffer.text[..buffer.cursor].width() as u16;
    let y = inner.y + line_offset;
    if y < inner.y + inner.height && x < inner.x + inner.width {
        f.set_cursor_position((x, y));
    }
}
