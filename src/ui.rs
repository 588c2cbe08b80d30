use crate::sorter;
use crate::task::{Priority, Task};
use crate::task_manager::TaskManager;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Terminal,
};
use std::io;
use tracing::debug;

const COLUMNS: [&str; 2] = ["PENDING", "COMPLETED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Insertion,
    HighFirst,
    LowFirst,
}

impl SortMode {
    pub fn cycle(self) -> Self {
        match self {
            Self::Insertion => Self::HighFirst,
            Self::HighFirst => Self::LowFirst,
            Self::LowFirst => Self::Insertion,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Insertion => "insertion order",
            Self::HighFirst => "high to low",
            Self::LowFirst => "low to high",
        }
    }
}

fn column_tasks(manager: &TaskManager, column: usize, sort_mode: SortMode) -> Vec<Task> {
    let tasks = manager.list_tasks_by_status(column == 1);
    match sort_mode {
        SortMode::Insertion => tasks,
        SortMode::HighFirst => sorter::sort_by_priority_descending(&tasks),
        SortMode::LowFirst => sorter::sort_by_priority_ascending(&tasks),
    }
}

fn selected_task_in(
    manager: &TaskManager,
    column: usize,
    index: usize,
    sort_mode: SortMode,
) -> Option<Task> {
    let tasks = column_tasks(manager, column, sort_mode);
    if tasks.is_empty() {
        return None;
    }
    let index = index.min(tasks.len() - 1);
    tasks.into_iter().nth(index)
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    manager: &mut TaskManager,
) -> io::Result<()> {
    let mut selected_column = 0;
    let mut selected_task = 0;
    let mut sort_mode = SortMode::Insertion;

    loop {
        terminal.draw(|f| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
                .split(f.area());

            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            for (i, column) in COLUMNS.iter().enumerate() {
                let tasks = column_tasks(manager, i, sort_mode);
                let items: Vec<ListItem> = if tasks.is_empty() {
                    vec![ListItem::new(Line::from(Span::styled(
                        "No tasks found.",
                        Style::default().fg(Color::DarkGray),
                    )))]
                } else {
                    tasks
                        .iter()
                        .map(|t| {
                            ListItem::new(Line::from(vec![
                                Span::raw(format!("[#{}] ", t.id)),
                                Span::styled(&t.title, Style::default().fg(Color::White)),
                                Span::styled(
                                    format!(" {}", t.priority),
                                    Style::default().fg(priority_color(t.priority)),
                                ),
                                Span::raw(format!(" (added {})", t.created_at)),
                            ]))
                        })
                        .collect()
                };

                let list = List::new(items)
                    .block(
                        Block::default()
                            .title(*column)
                            .borders(Borders::ALL)
                            .border_style(if selected_column == i {
                                Style::default().fg(Color::Cyan)
                            } else {
                                Style::default()
                            }),
                    )
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD));

                if selected_column == i && !tasks.is_empty() {
                    let mut state = ListState::default();
                    state.select(Some(selected_task.min(tasks.len() - 1)));
                    f.render_stateful_widget(list, chunks[i], &mut state);
                } else {
                    f.render_widget(list, chunks[i]);
                }
            }

            let help = Paragraph::new(format!(
                "a: add  Enter: complete  d: remove  s: sort ({})  arrows: move  q: quit",
                sort_mode.label()
            ))
            .style(Style::default().fg(Color::DarkGray));
            f.render_widget(help, rows[1]);
        })?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('a') => {
                    add_task_flow(manager);
                }
                KeyCode::Char('s') => {
                    sort_mode = sort_mode.cycle();
                }
                KeyCode::Char('d') => {
                    if let Some(task) =
                        selected_task_in(manager, selected_column, selected_task, sort_mode)
                    {
                        manager.remove_task(task.id);
                        selected_task = selected_task.saturating_sub(1);
                    }
                }
                KeyCode::Enter => {
                    if let Some(task) =
                        selected_task_in(manager, selected_column, selected_task, sort_mode)
                    {
                        manager.mark_completed(task.id);
                        selected_task = selected_task.saturating_sub(1);
                    }
                }
                KeyCode::Left => {
                    if selected_column > 0 {
                        selected_column -= 1;
                        selected_task = 0;
                    }
                }
                KeyCode::Right => {
                    if selected_column < COLUMNS.len() - 1 {
                        selected_column += 1;
                        selected_task = 0;
                    }
                }
                KeyCode::Up => {
                    if selected_task > 0 {
                        selected_task -= 1;
                    }
                }
                KeyCode::Down => {
                    let max_tasks = column_tasks(manager, selected_column, sort_mode).len();
                    if max_tasks > 0 && selected_task < max_tasks - 1 {
                        selected_task += 1;
                    }
                }
                _ => {}
            }
        }
    }
}

fn add_task_flow(manager: &mut TaskManager) {
    if let Some(title) = prompt("Enter task title") {
        if let Some(description) = prompt("Enter task description") {
            // Non-numeric or out-of-range input falls back to MEDIUM.
            let priority = prompt("Select priority (1. LOW  2. MEDIUM  3. HIGH)")
                .and_then(|input| input.parse::<u32>().ok())
                .and_then(Priority::from_choice)
                .unwrap_or(Priority::Medium);
            let id = manager.add_task(title, description, priority);
            debug!(id, "task added from prompt");
        }
    }
}

fn prompt(message: &str) -> Option<String> {
    disable_raw_mode().ok();
    println!("{}", message);
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_ok() {
        enable_raw_mode().ok();
        Some(input.trim().to_string())
    } else {
        enable_raw_mode().ok();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_sort_mode_cycles_through_all_modes() {
        let mode = SortMode::Insertion;
        let mode = mode.cycle();
        assert_eq!(mode, SortMode::HighFirst);
        let mode = mode.cycle();
        assert_eq!(mode, SortMode::LowFirst);
        let mode = mode.cycle();
        assert_eq!(mode, SortMode::Insertion);
    }

    #[test]
    fn test_column_tasks_applies_the_sort_mode() {
        let mut manager = TaskManager::new();
        manager.add_task("A".into(), String::new(), Priority::High);
        manager.add_task("B".into(), String::new(), Priority::Low);
        manager.add_task("C".into(), String::new(), Priority::High);

        assert_eq!(ids(&column_tasks(&manager, 0, SortMode::Insertion)), [1, 2, 3]);
        assert_eq!(ids(&column_tasks(&manager, 0, SortMode::HighFirst)), [1, 3, 2]);
        assert_eq!(ids(&column_tasks(&manager, 0, SortMode::LowFirst)), [2, 1, 3]);
    }

    #[test]
    fn test_completed_column_only_shows_completed_tasks() {
        let mut manager = TaskManager::new();
        let done = manager.add_task("A".into(), String::new(), Priority::Medium);
        manager.add_task("B".into(), String::new(), Priority::Medium);
        manager.mark_completed(done);

        assert_eq!(ids(&column_tasks(&manager, 1, SortMode::Insertion)), [done]);
        assert_eq!(ids(&column_tasks(&manager, 0, SortMode::Insertion)), [2]);
    }

    #[test]
    fn test_selected_task_index_is_clamped() {
        let mut manager = TaskManager::new();
        manager.add_task("A".into(), String::new(), Priority::Low);

        let task = selected_task_in(&manager, 0, 5, SortMode::Insertion);
        assert_eq!(task.map(|t| t.id), Some(1));
        assert!(selected_task_in(&manager, 1, 0, SortMode::Insertion).is_none());
    }
}
