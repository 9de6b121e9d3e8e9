//! UI Components
//!
//! Leptos components for the todo page.

mod icons;
mod notification_bar;
mod todo_form;
mod todo_item;
mod todo_list;
mod user_select;

pub use icons::{GithubIcon, XIcon};
pub use notification_bar::NotificationBar;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use user_select::UserSelect;
