//! API Gateway
//!
//! Thin wrappers over the remote todo REST API, one per operation.

mod client;
mod error;
mod fetch;
mod http;

pub use client::TodoClient;
pub use error::ApiError;

use crate::logging;
use crate::models::{Todo, TodoDraft, User};
use http::{HttpRequest, HttpResponse};

async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = request.method.as_str();
    let url = request.url.clone();
    let response = fetch::execute(request).await?;
    logging::log("API", &format!("{} {} -> {}", method, url, response.status));
    Ok(response)
}

pub async fn list_todos(client: &TodoClient, limit: u32) -> Result<Vec<Todo>, ApiError> {
    let response = send(client.build_list_todos(limit)).await?;
    client.parse_list_todos(response)
}

pub async fn list_users(client: &TodoClient) -> Result<Vec<User>, ApiError> {
    let response = send(client.build_list_users()).await?;
    client.parse_list_users(response)
}

pub async fn create_todo(client: &TodoClient, draft: &TodoDraft) -> Result<Todo, ApiError> {
    let response = send(client.build_create_todo(draft)?).await?;
    client.parse_create_todo(response)
}

pub async fn update_completed(client: &TodoClient, id: u32, completed: bool) -> Result<(), ApiError> {
    let response = send(client.build_update_completed(id, completed)?).await?;
    client.parse_update_completed(response)
}

pub async fn delete_todo(client: &TodoClient, id: u32) -> Result<(), ApiError> {
    let response = send(client.build_delete_todo(id)).await?;
    client.parse_delete_todo(response)
}
