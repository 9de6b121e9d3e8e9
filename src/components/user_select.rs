//! User Select Component
//!
//! Dropdown of loaded users behind a disabled placeholder.

use leptos::prelude::*;

use crate::store::{store_users, use_todo_store};

#[component]
pub fn UserSelect(#[prop(into)] on_change: Callback<String>) -> impl IntoView {
    let store = use_todo_store();

    view! {
        <select
            name="user"
            data-select=""
            required=true
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" disabled=true selected=true>"Select user"</option>
            <For
                each=move || store_users(&store)
                key=|user| user.id
                children=move |user| {
                    view! { <option value=user.id.to_string()>{user.name}</option> }
                }
            />
        </select>
    }
}
