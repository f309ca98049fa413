use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::CATEGORIES;
use crate::task::{Subtask, Task};

/// The whole application state: an ordered task list per category id.
///
/// The board is the single source of truth; every view is rebuilt from it.
/// Lists are newest-first (creation prepends). Keys that do not belong to
/// the category registry are kept so that saving never drops data written
/// by a different version, but they are never rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: BTreeMap<String, Vec<Task>>,
}

impl Board {
    /// One empty list per registered category.
    pub fn initial() -> Self {
        Self {
            lists: CATEGORIES
                .iter()
                .map(|c| (c.id.to_string(), Vec::new()))
                .collect(),
        }
    }

    /// Overlay parsed storage data on the initial baseline. Parsed values
    /// win; categories absent from the parsed blob keep their empty default,
    /// so a truncated blob never leaves a registered category without an
    /// entry.
    pub fn overlaid(mut self, parsed: BTreeMap<String, Vec<Task>>) -> Self {
        self.lists.extend(parsed);
        self
    }

    pub fn tasks(&self, category_id: &str) -> &[Task] {
        self.lists.get(category_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tasks_mut(&mut self, category_id: &str) -> &mut Vec<Task> {
        self.lists.entry(category_id.to_string()).or_default()
    }

    /// Insert a new task at the front of its category (newest-first order).
    pub fn prepend(&mut self, category_id: &str, task: Task) {
        self.tasks_mut(category_id).insert(0, task);
    }

    /// Remove the task with the given id from a category. Returns the
    /// removed task, or `None` if no task in that category matches.
    pub fn remove(&mut self, category_id: &str, task_id: &str) -> Option<Task> {
        let tasks = self.tasks_mut(category_id);
        let idx = tasks.iter().position(|t| t.id == task_id)?;
        Some(tasks.remove(idx))
    }

    pub fn task_mut(&mut self, category_id: &str, task_id: &str) -> Option<&mut Task> {
        self.tasks_mut(category_id)
            .iter_mut()
            .find(|t| t.id == task_id)
    }

    pub fn subtask_mut(
        &mut self,
        category_id: &str,
        task_id: &str,
        subtask_id: &str,
    ) -> Option<&mut Subtask> {
        self.task_mut(category_id, task_id)?
            .subtasks
            .iter_mut()
            .find(|s| s.id == subtask_id)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
