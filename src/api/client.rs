//! Todo API Client
//!
//! Stateless request builder and response parser. Each operation has a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method
//! consuming the matching `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::models::{Todo, TodoDraft, User};

// ========================
// Wire Payloads
// ========================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoFields {
    user_id: u32,
    title: String,
    completed: bool,
}

#[derive(Serialize)]
struct CreateTodoBody<'a> {
    todo: &'a TodoFields,
}

#[derive(Deserialize)]
struct CreatedTodo {
    id: u32,
    todo: TodoFields,
}

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

// ========================
// Client
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub fn build_list_todos(&self, limit: u32) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url(&format!("todos?_limit={limit}")))
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.url("users"))
    }

    pub fn build_create_todo(&self, draft: &TodoDraft) -> Result<HttpRequest, ApiError> {
        let fields = TodoFields {
            user_id: draft.user_id,
            title: draft.title.clone(),
            completed: false,
        };
        let body = serde_json::to_string(&CreateTodoBody { todo: &fields })
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest::new(HttpMethod::Post, self.url("todos")).with_json(body))
    }

    pub fn build_update_completed(&self, id: u32, completed: bool) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&CompletedPatch { completed })
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest::new(HttpMethod::Patch, self.url(&format!("todos/{id}"))).with_json(body))
    }

    pub fn build_delete_todo(&self, id: u32) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, self.url(&format!("todos/{id}")))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_success(&response)?;
        parse_body(&response)
    }

    /// The backend echoes the posted payload under `todo` next to the new id
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_success(&response)?;
        let CreatedTodo { id, todo } = parse_body(&response)?;
        Ok(Todo {
            id,
            user_id: todo.user_id,
            title: todo.title,
            completed: todo.completed,
        })
    }

    pub fn parse_update_completed(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    /// Deletion only counts when the server answers exactly 200
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }
}

fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(unexpected(response))
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(unexpected(response))
}

fn unexpected(response: &HttpResponse) -> ApiError {
    ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    }
}

fn parse_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("https://jsonplaceholder.typicode.com/")
    }

    fn ok(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    fn json_body(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn test_list_todos_request_carries_limit() {
        let req = client().build_list_todos(15);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/todos?_limit=15");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let req = TodoClient::new("http://localhost:3000").build_list_users();
        assert_eq!(req.url, "http://localhost:3000/users");
    }

    #[test]
    fn test_create_request_wraps_draft_in_todo() {
        let draft = TodoDraft {
            user_id: 1,
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_todo(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/todos");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );

        let body = json_body(&req);
        assert_eq!(body["todo"]["userId"], 1);
        assert_eq!(body["todo"]["title"], "Buy milk");
        assert_eq!(body["todo"]["completed"], false);
    }

    #[test]
    fn test_update_request_sends_only_completed() {
        let req = client().build_update_completed(7, true).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/todos/7");
        assert_eq!(json_body(&req), serde_json::json!({ "completed": true }));
    }

    #[test]
    fn test_delete_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "https://jsonplaceholder.typicode.com/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn test_parse_list_todos() {
        let body = r#"[
            {"userId":1,"id":1,"title":"delectus aut autem","completed":false},
            {"userId":1,"id":2,"title":"quis ut nam","completed":true}
        ]"#;
        let todos = client().parse_list_todos(ok(200, body)).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 2);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_parse_list_users_ignores_extra_fields() {
        let body = r#"[{"id":1,"name":"Leanne Graham","username":"Bret","email":"x@y.z"}]"#;
        let users = client().parse_list_users(ok(200, body)).unwrap();
        assert_eq!(
            users,
            vec![User {
                id: 1,
                name: "Leanne Graham".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = client()
            .parse_list_todos(ok(200, r#"[{"id":"one","title":"A"}]"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_parse_reports_error_status() {
        let err = client().parse_list_users(ok(500, "boom")).unwrap_err();
        assert_eq!(
            err,
            ApiError::UnexpectedStatus {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_parse_create_returns_server_id() {
        let body = r#"{"todo":{"userId":2,"title":"Buy milk","completed":false},"id":201}"#;
        let todo = client().parse_create_todo(ok(201, body)).unwrap();
        assert_eq!(
            todo,
            Todo {
                id: 201,
                user_id: 2,
                title: "Buy milk".to_string(),
                completed: false,
            }
        );
    }

    #[test]
    fn test_parse_create_without_echo_fails() {
        let err = client().parse_create_todo(ok(201, r#"{"id":201}"#)).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_parse_update_ignores_body() {
        assert!(client().parse_update_completed(ok(200, "{}")).is_ok());
        assert!(client().parse_update_completed(ok(404, "")).is_err());
    }

    #[test]
    fn test_delete_requires_exactly_200() {
        assert!(client().parse_delete_todo(ok(200, "{}")).is_ok());
        let err = client().parse_delete_todo(ok(204, "")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 204, .. }));
    }
}
