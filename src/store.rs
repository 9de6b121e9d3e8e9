//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! single source of truth for todos, including their `completed` flag.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::handlers::{toggle_row, CompletedUpdate};
use crate::models::{Todo, User};
use crate::render::{todo_rows, RenderTarget, TodoRow};

/// Todos and users mirrored from the API
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in display order, newest first after creation
    pub todos: Vec<Todo>,
    /// Users available for assignment and name lookup
    pub users: Vec<User>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Remove every todo with the given id, returning how many were removed
fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> usize {
    let before = todos.len();
    todos.retain(|todo| todo.id != id);
    before - todos.len()
}

// ========================
// Store Helper Functions
// ========================

/// Current list rows (tracked)
pub fn store_rows(store: &TodoStore) -> Vec<TodoRow> {
    todo_rows(&store.todos().get(), &store.users().get())
}

/// Current users (tracked)
pub fn store_users(store: &TodoStore) -> Vec<User> {
    store.users().get()
}

/// Apply a render target to the store
pub fn store_apply(store: &TodoStore, target: RenderTarget) {
    match target {
        RenderTarget::Todos(todos) => *store.todos().write() = todos,
        RenderTarget::Users(users) => *store.users().write() = users,
        RenderTarget::Todo(todo) => store.todos().write().insert(0, todo),
    }
}

/// Settle a DELETE: on success drop the todo, otherwise leave the list as is
pub fn store_finish_delete(
    store: &TodoStore,
    id: u32,
    result: Result<(), ApiError>,
) -> Result<usize, ApiError> {
    result.map(|()| remove_todo(&mut store.todos().write(), id))
}

/// Set the completed flag of the row with the given key
pub fn store_toggle(store: &TodoStore, key: (u32, usize), completed: bool) -> Option<CompletedUpdate> {
    toggle_row(&mut store.todos().write(), key, completed)
}
