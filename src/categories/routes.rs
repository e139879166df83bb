use super::handlers;
use axum::{
    routing::{delete, get},
    Router,
};

/// Creates the categories router with all category-related routes
pub fn categories_routes() -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::get_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/:id",
            get(handlers::get_category_by_id)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/categories/:id/books",
            get(handlers::get_category_books),
        )
        .route(
            "/api/categories/:id/books/:book_id",
            delete(handlers::delete_category_book),
        )
}
