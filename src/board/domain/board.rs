//! Board aggregate and its pure mutators.

use super::{ColumnSet, Task, TaskId};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashSet};

/// Column-name to task-list mapping as submitted by a client.
///
/// Unlike [`Board`], a snapshot may omit recognized columns or carry
/// columns the board does not know.
pub type ColumnSnapshot = BTreeMap<String, Vec<Task>>;

/// A named, ordered bucket of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tasks in top-to-bottom order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }
}

/// Full mapping of every recognized column to its tasks.
///
/// Every configured column is always present, in configured order. The JSON
/// form is an object keyed by column name, emitted in that same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates a board with every configured column and no tasks.
    #[must_use]
    pub fn empty(columns: &ColumnSet) -> Self {
        Self {
            columns: columns
                .names()
                .iter()
                .map(|name| Column {
                    name: name.clone(),
                    tasks: Vec::new(),
                })
                .collect(),
        }
    }

    /// Builds a board from a client snapshot.
    ///
    /// Tasks under columns outside `columns` are discarded; configured
    /// columns missing from the snapshot come out empty.
    #[must_use]
    pub fn from_snapshot(columns: &ColumnSet, mut snapshot: ColumnSnapshot) -> Self {
        let mut board = Self::empty(columns);
        for column in &mut board.columns {
            if let Some(tasks) = snapshot.remove(&column.name) {
                column.tasks = tasks;
            }
        }
        board
    }

    /// Returns the columns in configured order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column names in configured order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Returns the tasks of `column`, or `None` for an unknown column.
    #[must_use]
    pub fn tasks(&self, column: &str) -> Option<&[Task]> {
        self.column(column).map(Column::tasks)
    }

    /// Finds a task and the name of the column holding it.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&str, &Task)> {
        self.columns.iter().find_map(|column| {
            column
                .tasks
                .iter()
                .find(|task| task.id() == task_id)
                .map(|task| (column.name(), task))
        })
    }

    /// Returns whether any column holds a task with `task_id`.
    #[must_use]
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.find_task(task_id).is_some()
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    /// Moves a task to the bottom of another column.
    ///
    /// Returns the board unchanged when the columns are equal, when either
    /// column is unknown, or when `from` does not hold the task.
    #[must_use]
    pub fn move_task(mut self, task_id: &TaskId, from: &str, to: &str) -> Self {
        if from == to || self.column(to).is_none() {
            return self;
        }
        let Some(source) = self.column_mut(from) else {
            return self;
        };
        let Some(index) = source.position_of(task_id) else {
            return self;
        };
        let task = source.tasks.remove(index);
        if let Some(target) = self.column_mut(to) {
            target.tasks.push(task);
        }
        self
    }

    /// Flips the done flag of a task in `column`.
    ///
    /// Returns the board unchanged when the task is not in that column.
    #[must_use]
    pub fn toggle_done(mut self, task_id: &TaskId, column: &str) -> Self {
        if let Some(task) = self
            .column_mut(column)
            .and_then(|col| col.tasks.iter_mut().find(|task| task.id() == task_id))
        {
            task.toggle();
        }
        self
    }

    /// Removes a task from `column`.
    ///
    /// Returns the board unchanged when the task is not in that column.
    #[must_use]
    pub fn delete_task(mut self, task_id: &TaskId, column: &str) -> Self {
        if let Some(col) = self.column_mut(column) {
            col.tasks.retain(|task| task.id() != task_id);
        }
        self
    }

    /// Appends a new open task to the first column.
    ///
    /// The text is trimmed and folded onto one line; blank text leaves the
    /// board unchanged. The new identifier is regenerated until it is unused
    /// on this board.
    #[must_use]
    pub fn add_task(mut self, text: &str) -> Self {
        let task = Task::new(self.unused_id(), text, false);
        if task.text().is_empty() {
            return self;
        }
        if let Some(intake) = self.columns.first_mut() {
            intake.tasks.push(task);
        }
        self
    }

    /// Prepares the board for persistence.
    ///
    /// Task text is trimmed onto a single line, tasks left with blank text
    /// are dropped, and repeated identifiers get fresh ones so that every
    /// identifier stays unique.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut seen: HashSet<TaskId> = HashSet::new();
        for column in &mut self.columns {
            for task in &mut column.tasks {
                task.normalize_text();
            }
            column.tasks.retain(|task| !task.text().is_empty());
            for task in &mut column.tasks {
                if seen.contains(task.id()) {
                    let mut fresh = TaskId::generate();
                    while seen.contains(&fresh) {
                        fresh = TaskId::generate();
                    }
                    task.reassign_id(fresh);
                }
                seen.insert(task.id().clone());
            }
        }
        self
    }

    fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.name == name)
    }

    fn unused_id(&self) -> TaskId {
        let mut id = TaskId::generate();
        while self.contains_task(&id) {
            id = TaskId::generate();
        }
        id
    }

    pub(crate) fn push_task(&mut self, column: &str, task: Task) {
        if let Some(col) = self.column_mut(column) {
            col.tasks.push(task);
        }
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.tasks)?;
        }
        map.end()
    }
}
