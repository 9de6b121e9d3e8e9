//! Notification Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Shows the current notification; click to dismiss
#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notifications">
            {move || ctx.notification.get().map(|notification| view! {
                <div
                    class=notification.kind.class_name()
                    role="alert"
                    on:click=move |_| ctx.dismiss()
                >
                    {notification.message}
                </div>
            })}
        </div>
    }
}
