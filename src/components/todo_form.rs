//! Todo Form Component
//!
//! Form for creating a todo assigned to a user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::UserSelect;
use crate::context::use_app_context;
use crate::handlers::request_failed;
use crate::logging;
use crate::models::TodoDraft;
use crate::render::RenderTarget;
use crate::store::{store_apply, use_todo_store};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let (title, set_title) = signal(String::new());
    let (user, set_user) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = TodoDraft::from_form(&title.get(), &user.get()) else {
            return;
        };

        spawn_local(async move {
            match api::create_todo(&ctx.client(), &draft).await {
                Ok(todo) => {
                    logging::log("TodoForm", &format!("Created todo #{}", todo.id));
                    store_apply(&store, RenderTarget::Todo(todo));
                    set_title.set(String::new());
                }
                Err(e) => {
                    logging::error("TodoForm", &format!("Create failed: {}", e));
                    let (kind, message) = request_failed();
                    ctx.notify(kind, message);
                }
            }
        });
    };

    view! {
        <form autocomplete="off" data-form="" on:submit=create_todo>
            <label>
                <input
                    name="todo"
                    type="text"
                    placeholder="New todo"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <UserSelect on_change=move |value: String| set_user.set(value) />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
