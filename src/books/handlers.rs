use super::models::{CreateBookRequest, UpdateBookRequest};
use super::services::BooksService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// GET /api/books - Get all books (public)
pub async fn get_books(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let books_service = BooksService::new(app_state.db.clone());

    let books = books_service.get_all_books().await?;

    Ok(Json(json!({ "books": books })))
}

/// POST /api/books - Create a new book
pub async fn create_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Json(request): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let books_service = BooksService::new(app_state.db.clone());

    let book = books_service.create_book(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "book": book }))))
}

/// GET /api/books/:id - Get book by ID
pub async fn get_book_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(book_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let books_service = BooksService::new(app_state.db.clone());

    let book = books_service.get_book_by_id(book_id).await?;

    Ok(Json(json!({ "book": book })))
}

/// PUT /api/books/:id - Update book (merge-patch)
pub async fn update_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(book_id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let books_service = BooksService::new(app_state.db.clone());

    let book = books_service.update_book(book_id, request).await?;

    Ok(Json(json!({ "book": book })))
}

/// DELETE /api/books/:id - Delete book
pub async fn delete_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(book_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let books_service = BooksService::new(app_state.db.clone());

    books_service.delete_book(book_id).await?;

    Ok(Json(json!({
        "message": "Book deleted successfully",
        "id": book_id
    })))
}
