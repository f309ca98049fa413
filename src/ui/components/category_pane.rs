use crate::app::AppState;
use crate::category::CATEGORIES;
use crate::task::Task;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::{EMPTY_STATE, NO_SUBTASKS};

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect, category_index: usize) {
    let category = &CATEGORIES[category_index];
    let is_active = category_index == state.category_index;

    let border_style = if is_active {
        Style::default()
            .fg(state.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(state.theme.muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", category.title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // priority label
            Constraint::Length(3), // category description
            Constraint::Min(1),    // checklist
        ])
        .split(inner);

    let label = Paragraph::new(Span::styled(
        category.priority_label,
        Style::default().fg(state.theme.priority_label),
    ));
    f.render_widget(label, sections[0]);

    let blurb = Paragraph::new(category.description)
        .style(Style::default().fg(state.theme.muted))
        .wrap(Wrap { trim: true });
    f.render_widget(blurb, sections[1]);

    let list_area = sections[2];
    if is_active {
        state.list_viewport_height = list_area.height;
    }

    let tasks = state.board.tasks(category.id);
    if tasks.is_empty() {
        let empty = Paragraph::new(EMPTY_STATE)
            .style(
                Style::default()
                    .fg(state.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(empty, list_area);
        return;
    }

    let items = build_items(state, tasks);
    if is_active {
        let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_stateful_widget(list, list_area, &mut state.list_state);
    } else {
        f.render_widget(List::new(items), list_area);
    }
}

fn build_items(state: &AppState, tasks: &[Task]) -> Vec<ListItem<'static>> {
    let task_style = Style::default().fg(state.theme.foreground);
    let done_style = Style::default()
        .fg(state.theme.completed)
        .add_modifier(Modifier::CROSSED_OUT);
    let muted = Style::default().fg(state.theme.muted);
    let placeholder_style = muted.add_modifier(Modifier::ITALIC);

    let mut items = Vec::new();
    for task in tasks {
        let mut lines = vec![Line::from(vec![
            Span::styled(checkbox(task.completed), task_style),
            Span::styled(
                task.title.clone(),
                if task.completed { done_style } else { task_style },
            ),
        ])];
        // The description region is hidden entirely when empty.
        if !task.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", task.description),
                muted,
            )));
        }
        items.push(ListItem::new(lines));

        if task.subtasks.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("    {NO_SUBTASKS}"),
                placeholder_style,
            ))));
        } else {
            for subtask in &task.subtasks {
                let style = if subtask.completed { done_style } else { task_style };
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("    {}", checkbox(subtask.completed)), task_style),
                    Span::styled(subtask.text.clone(), style),
                ])));
            }
        }
    }
    items
}

fn checkbox(completed: bool) -> String {
    if completed { "[x] ".to_string() } else { "[ ] ".to_string() }
}
