use chrono::Local;
use std::fmt;

/// Relative urgency of a task. Declaration order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Maps the 1-3 menu digits to a priority.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    pub fn new(id: u32, title: String, description: String, priority: Priority) -> Self {
        let created_at = Local::now().format("%Y-%m-%d").to_string();
        Self {
            id,
            title,
            description,
            priority,
            completed: false,
            created_at,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} - {} ({}, {}, added {})",
            self.id,
            self.title,
            self.description,
            self.priority,
            if self.completed { "done" } else { "pending" },
            self.created_at
        )
    }
}
