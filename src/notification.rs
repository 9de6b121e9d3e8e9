//! Notifications
//!
//! Transient alerts shown above the app. Only the newest one is visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Danger,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Danger => "notification notification--danger",
        }
    }
}

/// Shown when the startup fetch fails
pub const STARTUP_FAILED: &str = "Something wrong :(";
/// Shown when a create, update or delete request fails
pub const REQUEST_FAILED: &str = "Something went wrong, open dev console.";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Increments per notification so a stale dismiss timer can't hide a newer one
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn next(previous: Option<&Notification>, kind: NotificationKind, message: String) -> Self {
        Self {
            id: previous.map_or(1, |n| n.id.wrapping_add(1)),
            kind,
            message,
        }
    }
}
