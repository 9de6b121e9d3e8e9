//! Render Targets
//!
//! The portions of the UI an update can touch, and the row view-models the
//! list is drawn from.

use crate::models::{Todo, User};

/// Name shown when a todo references a user that was not loaded
pub const UNKNOWN_USER: &str = "Unknown user";

/// A render request carrying exactly the data its target needs
#[derive(Debug, Clone, PartialEq)]
pub enum RenderTarget {
    /// Replace the whole todo list
    Todos(Vec<Todo>),
    /// Replace the user dropdown options
    Users(Vec<User>),
    /// Insert one new todo at the top of the list
    Todo(Todo),
}

/// One row of the todo list
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    /// Stable across prepends: (todo id, position counted from the bottom)
    pub key: (u32, usize),
    pub id: u32,
    pub title: String,
    pub user_name: Option<String>,
    pub completed: bool,
}

impl TodoRow {
    pub fn display_name(&self) -> String {
        self.user_name.clone().unwrap_or_else(|| UNKNOWN_USER.to_string())
    }
}

pub fn user_name(users: &[User], user_id: u32) -> Option<&str> {
    users
        .iter()
        .find(|user| user.id == user_id)
        .map(|user| user.name.as_str())
}

/// Distinct owner ids that have no matching user, in first-seen order
pub fn missing_user_ids(todos: &[Todo], users: &[User]) -> Vec<u32> {
    let mut missing = Vec::new();
    for todo in todos {
        if user_name(users, todo.user_id).is_none() && !missing.contains(&todo.user_id) {
            missing.push(todo.user_id);
        }
    }
    missing
}

/// Build the list rows in display order
pub fn todo_rows(todos: &[Todo], users: &[User]) -> Vec<TodoRow> {
    let len = todos.len();
    todos
        .iter()
        .enumerate()
        .map(|(index, todo)| TodoRow {
            key: (todo.id, len - index),
            id: todo.id,
            title: todo.title.clone(),
            user_name: user_name(users, todo.user_id).map(str::to_string),
            completed: todo.completed,
        })
        .collect()
}
