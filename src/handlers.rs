//! Handler Decisions
//!
//! What the startup load, checkbox and delete handlers do with their inputs,
//! kept free of DOM and network calls.

use crate::api::ApiError;
use crate::models::{Todo, User};
use crate::notification::{NotificationKind, REQUEST_FAILED, STARTUP_FAILED};
use crate::render::{missing_user_ids, RenderTarget};

/// Result of the joined startup fetch
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// Both lists arrived: render them, warn about todos with unknown owners
    Render {
        targets: [RenderTarget; 2],
        unknown_users: Vec<u32>,
    },
    /// Either request failed: render nothing, show one notification
    Failed {
        error: ApiError,
        kind: NotificationKind,
        message: &'static str,
    },
}

pub fn seed_outcome(result: Result<(Vec<Todo>, Vec<User>), ApiError>) -> SeedOutcome {
    match result {
        Ok((todos, users)) => SeedOutcome::Render {
            unknown_users: missing_user_ids(&todos, &users),
            targets: [RenderTarget::Todos(todos), RenderTarget::Users(users)],
        },
        Err(error) => SeedOutcome::Failed {
            error,
            kind: NotificationKind::Danger,
            message: STARTUP_FAILED,
        },
    }
}

/// The single PATCH a checkbox toggle sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedUpdate {
    pub id: u32,
    pub completed: bool,
}

/// Flip the row identified by `key` (todo id, position from the bottom).
///
/// Other todos sharing the id are left alone. Returns `None` when the key no
/// longer points at a row.
pub fn toggle_row(todos: &mut [Todo], key: (u32, usize), completed: bool) -> Option<CompletedUpdate> {
    let (id, from_bottom) = key;
    let index = todos.len().checked_sub(from_bottom)?;
    let todo = todos.get_mut(index).filter(|todo| todo.id == id)?;
    todo.completed = completed;
    Some(CompletedUpdate { id, completed })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// The user declined the confirmation
    Cancelled,
    /// Send the DELETE for this id
    Send(u32),
}

pub fn delete_step(id: u32, confirmed: bool) -> DeleteStep {
    if confirmed {
        DeleteStep::Send(id)
    } else {
        DeleteStep::Cancelled
    }
}

/// Notification for a failed create, update or delete
pub fn request_failed() -> (NotificationKind, &'static str) {
    (NotificationKind::Danger, REQUEST_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u32, user_id: u32, title: &str) -> Todo {
        Todo {
            id,
            user_id,
            title: title.to_string(),
            completed: false,
        }
    }

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne".to_string(),
        }
    }

    #[test]
    fn test_seed_success_renders_both_lists() {
        let todos = vec![todo(1, 1, "A"), todo(2, 1, "B")];
        let outcome = seed_outcome(Ok((todos.clone(), vec![leanne()])));

        assert_eq!(
            outcome,
            SeedOutcome::Render {
                targets: [RenderTarget::Todos(todos), RenderTarget::Users(vec![leanne()])],
                unknown_users: Vec::new(),
            }
        );
    }

    #[test]
    fn test_seed_success_reports_unknown_owners_once() {
        let todos = vec![todo(1, 7, "A"), todo(2, 7, "B"), todo(3, 1, "C")];
        match seed_outcome(Ok((todos, vec![leanne()]))) {
            SeedOutcome::Render { unknown_users, .. } => assert_eq!(unknown_users, [7]),
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_seed_failure_renders_nothing_and_notifies_once() {
        let error = ApiError::Network("offline".to_string());
        let outcome = seed_outcome(Err(error.clone()));

        assert_eq!(
            outcome,
            SeedOutcome::Failed {
                error,
                kind: NotificationKind::Danger,
                message: STARTUP_FAILED,
            }
        );
    }

    #[test]
    fn test_toggle_issues_one_update_and_keeps_rows() {
        let mut todos = vec![todo(3, 1, "C"), todo(2, 1, "B"), todo(1, 1, "A")];

        // "B" sits second from the bottom
        let update = toggle_row(&mut todos, (2, 2), true);

        assert_eq!(update, Some(CompletedUpdate { id: 2, completed: true }));
        assert_eq!(todos.len(), 3);
        assert!(todos[1].completed);
        assert!(!todos[0].completed && !todos[2].completed);
    }

    #[test]
    fn test_toggle_touches_only_clicked_duplicate() {
        let mut todos = vec![todo(201, 1, "new"), todo(201, 1, "older"), todo(1, 1, "A")];

        let update = toggle_row(&mut todos, (201, 2), true);

        assert_eq!(update, Some(CompletedUpdate { id: 201, completed: true }));
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_toggle_with_stale_key_does_nothing() {
        let mut todos = vec![todo(1, 1, "A")];
        assert_eq!(toggle_row(&mut todos, (1, 5), true), None);
        assert_eq!(toggle_row(&mut todos, (9, 1), true), None);
        assert!(!todos[0].completed);
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        assert_eq!(delete_step(4, false), DeleteStep::Cancelled);
        assert_eq!(delete_step(4, true), DeleteStep::Send(4));
    }
}
