//! Task list with an optional active selection.
//!
//! The task vector is what gets persisted; the active selection is
//! session-local and resets on reload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work the user is tracking against focus sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// UUID v4, generated at creation.
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub estimated_pomodoros: u32,
    pub completed_pomodoros: u32,
}

/// Owns the task list plus the active-task selection.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    active_id: Option<String>,
}

impl TaskBoard {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            active_id: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a new task and return its id. A zero estimate is bumped to 1.
    pub fn add(&mut self, title: impl Into<String>, estimated_pomodoros: u32) -> String {
        let id = Uuid::new_v4().to_string();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.into(),
            completed: false,
            estimated_pomodoros: estimated_pomodoros.max(1),
            completed_pomodoros: 0,
        });
        id
    }

    /// Flip a task's completed flag. Returns `false` for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task. Clears the active selection when it pointed here.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        true
    }

    /// Select (or clear) the task that completed focus sessions credit.
    /// Selecting an unknown id is rejected.
    pub fn set_active(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.active_id = None;
                true
            }
            Some(id) if self.get(id).is_some() => {
                self.active_id = Some(id.to_owned());
                true
            }
            Some(_) => false,
        }
    }

    /// Credit one completed pomodoro to the active task, if any.
    pub fn credit_active(&mut self) -> bool {
        let Some(active) = self.active_id.clone() else {
            return false;
        };
        match self.tasks.iter_mut().find(|t| t.id == active) {
            Some(task) => {
                task.completed_pomodoros += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_generates_unique_ids() {
        let mut board = TaskBoard::default();
        let a = board.add("write report", 3);
        let b = board.add("review code", 2);
        assert_ne!(a, b);
        assert_eq!(board.tasks().len(), 2);
        assert_eq!(board.get(&a).unwrap().title, "write report");
    }

    #[test]
    fn zero_estimate_is_bumped() {
        let mut board = TaskBoard::default();
        let id = board.add("quick fix", 0);
        assert_eq!(board.get(&id).unwrap().estimated_pomodoros, 1);
    }

    #[test]
    fn toggle_flips_completed() {
        let mut board = TaskBoard::default();
        let id = board.add("write report", 1);
        assert!(board.toggle(&id));
        assert!(board.get(&id).unwrap().completed);
        assert!(board.toggle(&id));
        assert!(!board.get(&id).unwrap().completed);
        assert!(!board.toggle("missing"));
    }

    #[test]
    fn credit_goes_to_active_task_only() {
        let mut board = TaskBoard::default();
        let a = board.add("write report", 3);
        let b = board.add("review code", 2);

        // No selection: no credit.
        assert!(!board.credit_active());

        assert!(board.set_active(Some(&a)));
        assert!(board.credit_active());
        assert!(board.credit_active());
        assert_eq!(board.get(&a).unwrap().completed_pomodoros, 2);
        assert_eq!(board.get(&b).unwrap().completed_pomodoros, 0);
    }

    #[test]
    fn delete_clears_matching_active_selection() {
        let mut board = TaskBoard::default();
        let a = board.add("write report", 3);
        let b = board.add("review code", 2);

        board.set_active(Some(&a));
        assert!(board.delete(&a));
        assert_eq!(board.active_id(), None);
        assert!(!board.credit_active());

        board.set_active(Some(&b));
        assert!(!board.delete("missing"));
        assert_eq!(board.active_id(), Some(b.as_str()));
    }

    #[test]
    fn set_active_rejects_unknown_ids() {
        let mut board = TaskBoard::default();
        let id = board.add("write report", 1);
        assert!(!board.set_active(Some("missing")));
        assert_eq!(board.active_id(), None);
        assert!(board.set_active(Some(&id)));
        assert!(board.set_active(None));
        assert_eq!(board.active_id(), None);
    }

    #[test]
    fn task_wire_format_is_camel_case() {
        let task = Task {
            id: "t1".into(),
            title: "write report".into(),
            completed: false,
            estimated_pomodoros: 3,
            completed_pomodoros: 1,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"estimatedPomodoros\":3"));
        assert!(json.contains("\"completedPomodoros\":1"));
    }
}
