//! HTTP surface of the user directory service.
//!
//! Each endpoint gets an explicit request/response struct so the JSON shape
//! is a compile-time contract rather than an ad hoc map. Errors are recovered
//! at the request boundary and turned into a JSON error body.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::directory::{Directory, DirectoryError, User};

pub const SERVICE_NAME: &str = "my-api";

/// Shared handler state: the directory plus what `GET /` reports.
pub struct AppState {
    directory: Mutex<Directory>,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Mutex::new(directory),
            started_at: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
    started_at: String,
}

#[derive(Serialize)]
struct UserList {
    total: usize,
    users: Vec<User>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-boundary error, mapped to a status code plus a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::MissingField(_) => ApiError::InvalidInput(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn lock_directory(state: &AppState) -> Result<MutexGuard<'_, Directory>, ApiError> {
    state
        .directory
        .lock()
        .map_err(|_| ApiError::Internal("Failed to lock directory".to_string()))
}

async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        started_at: state
            .started_at
            .to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<UserList>, ApiError> {
    let users = lock_directory(&state)?.list();
    debug!(total = users.len(), "listing users");
    Ok(Json(UserList {
        total: users.len(),
        users,
    }))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    // Malformed ids resolve to NotFound rather than a parse error.
    let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;
    let user = lock_directory(&state)?.get(id).ok_or(ApiError::NotFound)?;
    debug!(id, "fetched user");
    Ok(Json(user))
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = lock_directory(&state)?.create(payload.name, payload.email)?;
    info!(id = user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Build the service router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
        .with_state(state)
}
