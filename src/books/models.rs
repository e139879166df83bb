use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub price: f64,
    pub publication_date: String,
    pub edition: i64,
    pub author_id: i64,
    pub isbn: Option<String>,
    pub cover: Option<String>,
}

/// POST /api/books request body
///
/// Every field is required on create (including isbn and cover); optional
/// typing keeps missing values as field-level validation errors.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub price: Option<f64>,
    pub publication_date: Option<String>,
    pub edition: Option<i64>,
    pub author_id: Option<i64>,
    pub isbn: Option<String>,
    pub cover: Option<String>,
}

/// PUT /api/books/:id request body - merge-patch, every field optional
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub price: Option<f64>,
    pub publication_date: Option<String>,
    pub edition: Option<i64>,
    pub author_id: Option<i64>,
    pub isbn: Option<String>,
    pub cover: Option<String>,
}
