use super::handlers;
use axum::{routing::get, Router};

/// Creates the books router with all book-related routes
pub fn books_routes() -> Router {
    Router::new()
        .route(
            "/api/books",
            get(handlers::get_books).post(handlers::create_book),
        )
        .route(
            "/api/books/:id",
            get(handlers::get_book_by_id)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
}
