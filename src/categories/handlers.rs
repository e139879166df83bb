use super::models::{CategorySummary, CreateCategoryRequest, UpdateCategoryRequest};
use super::services::CategoriesService;
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

/// GET /api/categories - Get all categories (public)
pub async fn get_categories(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    let categories = categories_service.get_all_categories().await?;

    Ok(Json(json!({ "categories": categories })))
}

/// POST /api/categories - Create a new category
pub async fn create_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    let category = categories_service.create_category(request).await?;

    Ok((StatusCode::CREATED, Json(json!({ "category": category }))))
}

/// GET /api/categories/:id - Get category by ID
pub async fn get_category_by_id(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    let category = categories_service.get_category_by_id(category_id).await?;

    Ok(Json(json!({ "category": category })))
}

/// PUT /api/categories/:id - Update category (merge-patch)
pub async fn update_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(category_id): Path<i64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    let category = categories_service
        .update_category(category_id, request)
        .await?;

    Ok(Json(json!({ "category": category })))
}

/// DELETE /api/categories/:id - Delete category (books left untouched)
pub async fn delete_category(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    categories_service.delete_category(category_id).await?;

    Ok(Json(json!({
        "message": "Category deleted successfully",
        "id": category_id
    })))
}

/// GET /api/categories/:id/books - Get a category's books (public)
pub async fn get_category_books(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(category_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    let (category, books) = categories_service.get_category_books(category_id).await?;

    Ok(Json(json!({
        "category": CategorySummary {
            id: category.id,
            name: category.name,
        },
        "books": books
    })))
}

/// DELETE /api/categories/:id/books/:book_id - Delete one book under a category
pub async fn delete_category_book(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    _user: AuthedUser,
    Path((category_id, book_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let categories_service = CategoriesService::new(app_state.db.clone());

    categories_service
        .delete_category_book(category_id, book_id)
        .await?;

    Ok(Json(json!({
        "message": "Book deleted successfully",
        "book_id": book_id
    })))
}
