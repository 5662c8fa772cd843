//! User handlers
//!
//! Registration, profile reads and profile updates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewUser, User, UserId, UserUpdate};
use crate::error::AppError;
use crate::AppState;

/// Request to register a user. Client-supplied `id` and timestamps are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub balance: i64,
}

/// Request to update a user. Omit `password` (or send it empty) to keep the
/// current one. Balance cannot be changed here.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub address: String,
}

/// User as returned by the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub number: String,
    pub address: String,
    pub balance: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            number: user.number,
            address: user.address,
            balance: user.balance,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// POST /users
///
/// Register a new user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    for (field, value) in [
        ("name", &request.name),
        ("email", &request.email),
        ("password", &request.password),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }

    let user = state
        .user_service
        .create_user(NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
            number: request.number,
            address: request.address,
            balance: request.balance,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user_by_id(&UserId(id)).await?;

    Ok(Json(user.into()))
}

/// GET /users/by-email/:email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_by_email(&email).await?;

    Ok(Json(user.into()))
}

/// PUT /users/:id
///
/// Update name, email, contact details and optionally the password.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .update_user(UserUpdate {
            id: UserId(id),
            name: request.name,
            email: request.email,
            password: request.password,
            number: request.number,
            address: request.address,
        })
        .await?;

    Ok(Json(user.into()))
}
