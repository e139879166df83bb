//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User database model. The password hash stays inside the service layer
/// and is never serialized into a response.
#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User as exposed by GET /api/users
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// User returned from login, carrying the freshly issued bearer token
#[derive(Serialize, Debug)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// POST /api/users/login request body
///
/// Fields are optional so that missing values surface as field-level
/// validation errors rather than a body-deserialization failure.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}
