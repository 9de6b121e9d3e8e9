//! Todo App
//!
//! Root component: loads todos and users, then hosts the form and the list.

use futures::future::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{GithubIcon, NotificationBar, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::handlers::{seed_outcome, SeedOutcome};
use crate::logging;
use crate::store::{store_apply, TodoState, TodoStore};

const AUTHOR_URL: &str = "https://github.com/nagoev-alim";

#[component]
pub fn App() -> impl IntoView {
    // State
    let store: TodoStore = Store::new(TodoState::default());
    let (notification, set_notification) = signal(None);
    let ctx = AppContext::new(AppConfig::from_document(), (notification, set_notification));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load todos and users once on mount
    Effect::new(move |_| {
        spawn_local(load_seed(store, ctx));
    });

    view! {
        <div class="app-container">
            <div class="todo">
                <h2 class="title">"Todo"</h2>
                <div class="main">
                    <TodoForm />
                    <TodoList />
                </div>
            </div>

            <a class="app-author" href=AUTHOR_URL target="_blank">
                <GithubIcon />
            </a>

            <NotificationBar />
        </div>
    }
}

/// Fetch both lists concurrently; render them only if both arrive
async fn load_seed(store: TodoStore, ctx: AppContext) {
    let client = ctx.client();
    let limit = ctx.todo_limit();

    let result = try_join(api::list_todos(&client, limit), api::list_users(&client)).await;
    match seed_outcome(result) {
        SeedOutcome::Render { targets, unknown_users } => {
            for user_id in unknown_users {
                logging::warn("APP", &format!("Todos reference unknown user #{}", user_id));
            }
            for target in targets {
                store_apply(&store, target);
            }
            logging::log("APP", "Loaded todos and users");
        }
        SeedOutcome::Failed { error, kind, message } => {
            logging::error("APP", &format!("Startup fetch failed: {}", error));
            ctx.notify(kind, message);
        }
    }
}
