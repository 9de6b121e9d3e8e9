//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoClient;
use crate::config::AppConfig;
use crate::notification::{Notification, NotificationKind};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded configuration
    config: StoredValue<AppConfig>,
    /// Visible notification - read
    pub notification: ReadSignal<Option<Notification>>,
    /// Visible notification - write
    set_notification: WriteSignal<Option<Notification>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        notification: (ReadSignal<Option<Notification>>, WriteSignal<Option<Notification>>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            notification: notification.0,
            set_notification: notification.1,
        }
    }

    pub fn client(&self) -> TodoClient {
        self.config.with_value(AppConfig::client)
    }

    pub fn todo_limit(&self) -> u32 {
        self.config.with_value(|config| config.todo_limit)
    }

    /// Show a transient notification, replacing any visible one
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let next = Notification::next(
            self.notification.get_untracked().as_ref(),
            kind,
            message.into(),
        );
        let id = next.id;
        self.set_notification.set(Some(next));

        let timeout = self.config.with_value(|config| config.notification_timeout_ms);
        let set_notification = self.set_notification;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            set_notification.update(|slot| {
                if slot.as_ref().is_some_and(|n| n.id == id) {
                    *slot = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        self.set_notification.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
