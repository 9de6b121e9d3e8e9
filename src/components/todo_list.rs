//! Todo List Component
//!
//! Keyed list of todo rows. Prepending a todo keeps the existing rows.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_rows, use_todo_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul data-list="">
            <For
                each=move || store_rows(&store)
                key=|row| row.key
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>
    }
}
