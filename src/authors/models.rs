use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub nationality: String,
    pub age: i64,
    pub gender: String,
}

/// POST /api/authors request body
///
/// All fields required; kept optional at the type level so missing values
/// produce field-level validation errors instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

/// PUT /api/authors/:id request body - merge-patch, every field optional
#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
}

/// Author id/name pair embedded in the author→books response
#[derive(Debug, Serialize)]
pub struct AuthorSummary {
    pub id: i64,
    pub name: String,
}
