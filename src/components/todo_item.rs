//! Todo Item Component
//!
//! A single row: completion checkbox, title with owner name, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::XIcon;
use crate::context::use_app_context;
use crate::dialog;
use crate::handlers::{delete_step, request_failed, DeleteStep};
use crate::logging;
use crate::render::TodoRow;
use crate::store::{store_finish_delete, store_toggle, use_todo_store};

const DELETE_PROMPT: &str = "Are you sure to delete?";

#[component]
pub fn TodoItem(row: TodoRow) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let id = row.id;
    let key = row.key;
    let name = row.display_name();

    // The store owns the flag; a failed PATCH is reported but not rolled back
    let toggle = move |ev: web_sys::Event| {
        let completed = event_target_checked(&ev);
        let Some(update) = store_toggle(&store, key, completed) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::update_completed(&ctx.client(), update.id, update.completed).await {
                logging::error("TodoItem", &format!("Update of #{} failed: {}", update.id, e));
                let (kind, message) = request_failed();
                ctx.notify(kind, message);
            }
        });
    };

    let delete = move |_: web_sys::MouseEvent| {
        let DeleteStep::Send(id) = delete_step(id, dialog::confirm(DELETE_PROMPT)) else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_todo(&ctx.client(), id).await;
            match store_finish_delete(&store, id, result) {
                Ok(removed) => {
                    logging::log("TodoItem", &format!("Deleted #{} ({} row(s))", id, removed));
                }
                Err(e) => {
                    logging::error("TodoItem", &format!("Delete of #{} failed: {}", id, e));
                    let (kind, message) = request_failed();
                    ctx.notify(kind, message);
                }
            }
        });
    };

    view! {
        <li data-id=id.to_string()>
            <label>
                <input
                    type="checkbox"
                    data-checkbox=""
                    prop:checked=row.completed
                    on:change=toggle
                />
                <span class="checkbox"></span>
            </label>
            <p>{row.title}<span>{name}</span></p>
            <button data-delete=id.to_string() on:click=delete>
                <XIcon />
            </button>
        </li>
    }
}
