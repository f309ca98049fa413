use super::form::{FormFocus, FormState};
use super::mode::Mode;
use crate::category::{self, CATEGORIES, Category};
use crate::storage::UiCache;
use crate::storage::file::save_board;
use crate::task::{Board, Subtask, Task};
use crate::ui::theme::Theme;
use anyhow::Result;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::Instant;

/// A selectable row in the active category's checklist. Placeholder rows
/// ("No subtasks yet.") are rendered but never selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Task(usize),
    Subtask(usize, usize),
}

pub struct AppState {
    pub board: Board,
    pub board_path: PathBuf,
    pub category_index: usize,
    pub cursor_position: usize,
    pub mode: Mode,
    pub form: FormState,
    /// Id of the task awaiting delete confirmation
    pub pending_delete: Option<String>,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
    pub list_state: ListState,
    /// Rows available to the active checklist, updated on each render
    pub list_viewport_height: u16,
}

impl AppState {
    pub fn new(board: Board, board_path: PathBuf, theme: Theme, ui_cache: Option<UiCache>) -> Self {
        let mut state = Self {
            board,
            board_path,
            category_index: 0,
            cursor_position: 0,
            mode: Mode::Navigate,
            form: FormState::new(),
            pending_delete: None,
            should_quit: false,
            show_help: false,
            theme,
            status_message: None,
            list_state: ListState::default(),
            list_viewport_height: 24,
        };

        if let Some(cache) = ui_cache {
            if let Some(idx) = cache.category_id.as_deref().and_then(category::index_of) {
                state.category_index = idx;
            }
            if let Some(task_id) = cache.selected_task_id.as_deref() {
                state.select_task(task_id);
            }
        }

        state.sync_list_state();
        state
    }

    /// Snapshot of the current selection for the next launch.
    pub fn ui_cache(&self) -> UiCache {
        UiCache {
            category_id: Some(self.active_category().id.to_string()),
            selected_task_id: self.selected_task_id(),
        }
    }

    pub fn active_category(&self) -> &'static Category {
        &CATEGORIES[self.category_index]
    }

    pub fn active_tasks(&self) -> &[Task] {
        self.board.tasks(self.active_category().id)
    }

    /// Selectable rows of the active category, in render order.
    pub fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (t, task) in self.active_tasks().iter().enumerate() {
            rows.push(Row::Task(t));
            for s in 0..task.subtasks.len() {
                rows.push(Row::Subtask(t, s));
            }
        }
        rows
    }

    pub fn selected_row(&self) -> Option<Row> {
        self.rows().get(self.cursor_position).copied()
    }

    fn selected_task_id(&self) -> Option<String> {
        let task_index = match self.selected_row()? {
            Row::Task(t) | Row::Subtask(t, _) => t,
        };
        self.active_tasks().get(task_index).map(|t| t.id.clone())
    }

    fn select_task(&mut self, task_id: &str) {
        let tasks = self.active_tasks();
        let pos = self
            .rows()
            .iter()
            .position(|row| matches!(row, Row::Task(t) if tasks[*t].id == task_id));
        if let Some(pos) = pos {
            self.cursor_position = pos;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.rows().len();
        if rows > 0 && self.cursor_position < rows - 1 {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn select_first(&mut self) {
        self.cursor_position = 0;
        self.sync_list_state();
    }

    pub fn select_last(&mut self) {
        self.cursor_position = self.rows().len().saturating_sub(1);
        self.sync_list_state();
    }

    pub fn clamp_cursor(&mut self) {
        let rows = self.rows().len();
        if rows == 0 {
            self.cursor_position = 0;
        } else {
            self.cursor_position = self.cursor_position.min(rows - 1);
        }
        self.sync_list_state();
    }

    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % CATEGORIES.len();
        self.cursor_position = 0;
        self.sync_list_state();
    }

    pub fn prev_category(&mut self) {
        self.category_index = (self.category_index + CATEGORIES.len() - 1) % CATEGORIES.len();
        self.cursor_position = 0;
        self.sync_list_state();
    }

    /// Map the cursor row to its list-item index (placeholder rows occupy
    /// an item slot without being selectable) and keep it inside the
    /// viewport.
    pub fn sync_list_state(&mut self) {
        let rows = self.rows();
        if rows.is_empty() {
            self.list_state.select(None);
            return;
        }
        let cursor = self.cursor_position.min(rows.len() - 1);
        let target = rows[cursor];

        let mut visible_index = 0;
        'outer: for (t, task) in self.active_tasks().iter().enumerate() {
            if target == Row::Task(t) {
                break 'outer;
            }
            visible_index += 1;
            if task.subtasks.is_empty() {
                visible_index += 1; // "No subtasks yet." placeholder
                continue;
            }
            for s in 0..task.subtasks.len() {
                if target == Row::Subtask(t, s) {
                    break 'outer;
                }
                visible_index += 1;
            }
        }

        self.list_state.select(Some(visible_index));

        let viewport = self.list_viewport_height.max(1) as usize;
        let offset = self.list_state.offset();
        if visible_index < offset {
            *self.list_state.offset_mut() = visible_index;
        } else if visible_index >= offset + viewport {
            *self.list_state.offset_mut() = visible_index.saturating_sub(viewport - 1);
        }
    }

    pub fn open_form(&mut self) {
        self.form.ensure_subtask_input();
        self.form.focus = FormFocus::Title;
        self.mode = Mode::Form;
    }

    pub fn close_form(&mut self) {
        self.mode = Mode::Navigate;
    }

    /// Submit the creation form against the active category.
    ///
    /// An empty (post-trim) title aborts: focus returns to the title field
    /// and nothing is mutated or reset. Otherwise the new task is prepended,
    /// the board is persisted before the next render, and the form collapses
    /// back to its single-blank-input state.
    pub fn submit_form(&mut self) -> Result<()> {
        let title = self.form.title.trimmed().to_string();
        if title.is_empty() {
            self.form.focus = FormFocus::Title;
            return Ok(());
        }

        let description = self.form.description.trimmed().to_string();
        let subtasks = self
            .form
            .collect_subtasks()
            .into_iter()
            .map(Subtask::new)
            .collect();

        let category = self.active_category();
        self.board
            .prepend(category.id, Task::new(title, description, subtasks));
        save_board(&self.board_path, &self.board)?;

        self.form.reset();
        self.mode = Mode::Navigate;
        self.cursor_position = 0;
        self.sync_list_state();
        self.set_status_message(format!("Added to {}", category.title));
        Ok(())
    }

    /// Flip the completed flag of the row under the cursor and persist.
    pub fn toggle_selected(&mut self) -> Result<()> {
        let Some(row) = self.selected_row() else {
            return Ok(());
        };

        let category_id = self.active_category().id;
        let tasks = self.board.tasks_mut(category_id);
        match row {
            Row::Task(t) => tasks[t].completed = !tasks[t].completed,
            Row::Subtask(t, s) => {
                tasks[t].subtasks[s].completed = !tasks[t].subtasks[s].completed;
            }
        }

        save_board(&self.board_path, &self.board)
    }

    /// Ask for confirmation before deleting the task under the cursor.
    /// Subtasks are never individually deleted.
    pub fn request_delete(&mut self) {
        match self.selected_row() {
            Some(Row::Task(t)) => {
                self.pending_delete = Some(self.active_tasks()[t].id.clone());
                self.mode = Mode::ConfirmDelete;
            }
            Some(Row::Subtask(..)) => {
                self.set_status_message("Subtasks can be checked off, not removed".to_string());
            }
            None => {}
        }
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        if let Some(task_id) = self.pending_delete.take() {
            let category_id = self.active_category().id;
            if self.board.remove(category_id, &task_id).is_some() {
                save_board(&self.board_path, &self.board)?;
                self.set_status_message("Removed priority".to_string());
            }
        }
        self.mode = Mode::Navigate;
        self.clamp_cursor();
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.mode = Mode::Navigate;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed().as_secs() > 3
        {
            self.status_message = None;
        }
    }
}
