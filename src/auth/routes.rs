//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/users/login` - Email/password login, rotates the bearer token
/// - `GET /api/users` - List all users (requires bearer token)
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/users/login", post(handlers::login))
        .route("/api/users", get(handlers::list_users))
}
