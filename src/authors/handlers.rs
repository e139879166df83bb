use super::models::{AuthorSummary, CreateAuthorRequest, UpdateAuthorRequest};
use super::services::AuthorsService;
use crate::auth::AuthedUser;
use crate::books::models::CreateBookRequest;
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

// ============================================================================
// Author CRUD Handlers
// ============================================================================

/// GET /api/authors - Get all authors (public)
pub async fn get_authors(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let authors = authors_service.get_all_authors().await?;

    Ok(Json(json!({ "authors": authors })))
}

/// POST /api/authors - Create a new author
pub async fn create_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Json(request): Json<CreateAuthorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let author = authors_service.create_author(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "author": author }))))
}

/// GET /api/authors/:id - Get author by ID
pub async fn get_author_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(author_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let author = authors_service.get_author_by_id(author_id).await?;

    Ok(Json(json!({ "author": author })))
}

/// PUT /api/authors/:id - Update author (merge-patch)
pub async fn update_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(author_id): Path<i64>,
    Json(request): Json<UpdateAuthorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let author = authors_service.update_author(author_id, request).await?;

    Ok(Json(json!({ "author": author })))
}

/// DELETE /api/authors/:id - Delete author (cascades to its books)
pub async fn delete_author(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(author_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    authors_service.delete_author(author_id).await?;

    Ok(Json(json!({
        "message": "Author deleted successfully",
        "id": author_id
    })))
}

// ============================================================================
// Author Relationship Handlers
// ============================================================================

/// GET /api/authors/:id/books - Get an author's books (public)
pub async fn get_author_books(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(author_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let (author, books) = authors_service.get_author_books(author_id).await?;

    Ok(Json(json!({
        "author": AuthorSummary {
            id: author.id,
            name: author.name,
        },
        "books": books
    })))
}

/// POST /api/authors/:id/books - Create a book under an author
pub async fn create_author_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(author_id): Path<i64>,
    Json(request): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    let book = authors_service.create_author_book(author_id, request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "book": book }))))
}

/// DELETE /api/authors/:id/books/:book_id - Delete one book under an author
pub async fn delete_author_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path((author_id, book_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let authors_service = AuthorsService::new(app_state.db.clone());

    authors_service.delete_author_book(author_id, book_id).await?;

    Ok(Json(json!({
        "message": "Book deleted successfully",
        "book_id": book_id
    })))
}
