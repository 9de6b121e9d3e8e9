//! Application Configuration
//!
//! Defaults target the public JSONPlaceholder API. The host page may override
//! them with `<meta name="todo-api-base" content="...">`, `todo-limit` and
//! `todo-notification-ms` tags.

use crate::api::TodoClient;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com/";
pub const DEFAULT_TODO_LIMIT: u32 = 15;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the todo REST API
    pub api_base: String,
    /// How many todos to request on startup
    pub todo_limit: u32,
    /// How long a notification stays visible
    pub notification_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            todo_limit: DEFAULT_TODO_LIMIT,
            notification_timeout_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl AppConfig {
    /// Read overrides from `<meta>` tags in the current document
    pub fn from_document() -> Self {
        Self::from_overrides(
            read_meta("todo-api-base"),
            read_meta("todo-limit"),
            read_meta("todo-notification-ms"),
        )
    }

    /// Apply raw override values; blank or unparsable values keep the default
    pub fn from_overrides(
        api_base: Option<String>,
        todo_limit: Option<String>,
        notification_ms: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.api_base),
            todo_limit: parse_positive(todo_limit).unwrap_or(defaults.todo_limit),
            notification_timeout_ms: parse_positive(notification_ms)
                .unwrap_or(defaults.notification_timeout_ms),
        }
    }

    pub fn client(&self) -> TodoClient {
        TodoClient::new(&self.api_base)
    }
}

fn parse_positive(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse().ok().filter(|n: &u32| *n > 0)
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{}']", name))
        .ok()??;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.todo_limit, 15);
        assert_eq!(config.notification_timeout_ms, 3000);
    }

    #[test]
    fn test_overrides_apply() {
        let config = AppConfig::from_overrides(
            Some("http://localhost:3000".to_string()),
            Some(" 5 ".to_string()),
            Some("800".to_string()),
        );
        assert_eq!(config.api_base, "http://localhost:3000");
        assert_eq!(config.todo_limit, 5);
        assert_eq!(config.notification_timeout_ms, 800);
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let config = AppConfig::from_overrides(
            Some("   ".to_string()),
            Some("0".to_string()),
            Some("soon".to_string()),
        );
        assert_eq!(config, AppConfig::default());
    }
}
