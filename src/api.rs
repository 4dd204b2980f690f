//! Remote API Wrappers
//!
//! Frontend bindings to the task backend over browser `fetch`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::config::api_base_url;
use crate::models::{MessageResponse, Task, TaskPage, TaskPriority, TaskStatus, User};

/// Failure modes of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text fit for a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) => "Something went wrong".to_string(),
        }
    }
}

fn as_transport(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{err:?}"))
}

/// Issue one request and hand back the status plus the decoded JSON body.
/// Cookies ride along on every call, the session token lives in one.
async fn send(method: &str, path: &str, body: Option<String>) -> Result<(u16, JsValue), ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", api_base_url(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(as_transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(as_transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(as_transport)?;
    let response: Response = response.dyn_into().map_err(as_transport)?;
    let status = response.status();
    let payload = JsFuture::from(response.json().map_err(as_transport)?)
        .await
        .map_err(as_transport)?;
    Ok((status, payload))
}

/// Decode a success body, or turn a non-200 into `ApiError::Rejected`.
fn expect_ok<T: DeserializeOwned>(status: u16, payload: JsValue) -> Result<T, ApiError> {
    if status == 200 {
        serde_wasm_bindgen::from_value(payload).map_err(|e| ApiError::Transport(e.to_string()))
    } else {
        Err(rejection(status, payload))
    }
}

fn rejection(status: u16, payload: JsValue) -> ApiError {
    let message = serde_wasm_bindgen::from_value::<MessageResponse>(payload)
        .map(|body| body.message)
        .unwrap_or_default();
    let message = if message.is_empty() {
        "Something went wrong".to_string()
    } else {
        message
    };
    ApiError::Rejected { status, message }
}

fn encode<T: Serialize>(args: &T) -> Result<String, ApiError> {
    serde_json::to_string(args).map_err(|e| ApiError::Transport(e.to_string()))
}

// ========================
// Request Argument Structs
// ========================

#[derive(Serialize)]
pub struct SignUpArgs<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignInArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub name: &'a str,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    pub name: &'a str,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// `None` serializes as `null` and clears the deadline server-side.
    pub due: Option<DateTime<Utc>>,
}

// ========================
// Auth Endpoints
// ========================

pub async fn sign_up(args: &SignUpArgs<'_>) -> Result<User, ApiError> {
    let body = encode(args)?;
    let (status, payload) = send("POST", "/auth/signup", Some(body)).await?;
    expect_ok(status, payload)
}

pub async fn sign_in(args: &SignInArgs<'_>) -> Result<User, ApiError> {
    let body = encode(args)?;
    let (status, payload) = send("POST", "/auth/signin", Some(body)).await?;
    expect_ok(status, payload)
}

pub async fn sign_out() -> Result<MessageResponse, ApiError> {
    let (status, payload) = send("POST", "/auth/signout", None).await?;
    expect_ok(status, payload)
}

// ========================
// Task Endpoints
// ========================

pub async fn list_tasks(user_id: &str, query: &str) -> Result<TaskPage, ApiError> {
    let path = if query.is_empty() {
        format!("/tasks/user/{user_id}")
    } else {
        format!("/tasks/user/{user_id}?{query}")
    };
    let (status, payload) = send("GET", &path, None).await?;
    expect_ok(status, payload)
}

pub async fn get_task(task_id: &str) -> Result<Task, ApiError> {
    let (status, payload) = send("GET", &format!("/tasks/{task_id}"), None).await?;
    expect_ok(status, payload)
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<MessageResponse, ApiError> {
    let body = encode(args)?;
    let (status, payload) = send("POST", "/tasks", Some(body)).await?;
    expect_ok(status, payload)
}

pub async fn update_task(task_id: &str, args: &UpdateTaskArgs<'_>) -> Result<MessageResponse, ApiError> {
    let body = encode(args)?;
    let (status, payload) = send("PUT", &format!("/tasks/{task_id}"), Some(body)).await?;
    expect_ok(status, payload)
}

pub async fn delete_task(task_id: &str) -> Result<MessageResponse, ApiError> {
    let (status, payload) = send("DELETE", &format!("/tasks/{task_id}"), None).await?;
    expect_ok(status, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date_input;

    #[test]
    fn test_rejected_error_carries_backend_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_transport_error_gets_generic_message() {
        let err = ApiError::Transport("failed to fetch".to_string());
        assert_eq!(err.user_message(), "Something went wrong");
    }

    #[test]
    fn test_create_args_omit_missing_due() {
        let args = CreateTaskArgs {
            name: "Ship it",
            priority: TaskPriority::Urgent,
            due: None,
        };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"name":"Ship it","priority":"urgent"}"#);
    }

    #[test]
    fn test_update_args_null_out_cleared_due() {
        let args = UpdateTaskArgs {
            name: "Ship it",
            priority: TaskPriority::Normal,
            status: TaskStatus::Done,
            due: None,
        };
        let json = serde_json::to_string(&args).unwrap();
        assert!(json.contains(r#""due":null"#));
    }

    #[test]
    fn test_update_args_keep_set_due() {
        let args = UpdateTaskArgs {
            name: "Ship it",
            priority: TaskPriority::Normal,
            status: TaskStatus::Open,
            due: parse_date_input("2024-06-10"),
        };
        let json = serde_json::to_string(&args).unwrap();
        assert!(json.contains("2024-06-10T00:00:00Z"));
    }
}
