use crate::task::{Priority, Task};
use tracing::debug;

/// Owns the task list. Ids come from an explicit counter so they are never
/// reused, even after a removal.
#[derive(Debug)]
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskManager {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add_task(&mut self, title: String, description: String, priority: Priority) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, priority = %priority, "adding task");
        self.tasks.push(Task::new(id, title, description, priority));
        id
    }

    pub fn mark_completed(&mut self, id: u32) -> bool {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = true;
            debug!(id, "task marked as completed");
            true
        } else {
            false
        }
    }

    pub fn list_all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn list_tasks_by_status(&self, completed: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect()
    }

    pub fn remove_task(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(id, "task removed");
        }
        removed
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
