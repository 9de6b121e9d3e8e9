//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// User data structure (matches backend, extra fields ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// A todo that has not been sent to the backend yet
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub user_id: u32,
    pub title: String,
}

impl TodoDraft {
    /// Build a draft from raw form values.
    ///
    /// Returns `None` when either field is empty or the user id is not a number.
    pub fn from_form(title: &str, user: &str) -> Option<Self> {
        if title.is_empty() || user.is_empty() {
            return None;
        }
        let user_id = user.parse().ok()?;
        Some(Self {
            user_id,
            title: title.to_string(),
        })
    }
}
