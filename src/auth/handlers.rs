//! Authentication handlers

use axum::extract::{Extension, Json};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::extractors::AuthedUser;
use super::models::LoginRequest;
use super::services::AuthService;
use crate::common::{ApiError, AppState, Validator};

/// POST /api/users/login - Authenticate and issue a fresh bearer token
///
/// # Request Body
/// ```json
/// { "email": "john@example.com", "password": "secret" }
/// ```
///
/// # Response
/// ```json
/// { "user": { "id": 1, "name": "John Doe", "email": "john@example.com", "token": "..." } }
/// ```
pub async fn login(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let validation_result = request.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    // Presence was just validated
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    let app_state = state.read().await;
    let auth_service = AuthService::new(app_state.db.clone());

    let user = auth_service.login(email, password).await?;

    Ok(Json(json!({ "user": user })))
}

/// GET /api/users - List all users (password hash never serialized)
pub async fn list_users(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let app_state = state.read().await;
    let auth_service = AuthService::new(app_state.db.clone());

    let users = auth_service.list_users().await?;

    Ok(Json(json!({ "users": users })))
}
