use super::handlers;
use axum::{
    routing::{delete, get},
    Router,
};

/// Creates the authors router with all author-related routes
pub fn authors_routes() -> Router {
    Router::new()
        .route(
            "/api/authors",
            get(handlers::get_authors).post(handlers::create_author),
        )
        .route(
            "/api/authors/:id",
            get(handlers::get_author_by_id)
                .put(handlers::update_author)
                .delete(handlers::delete_author),
        )
        .route(
            "/api/authors/:id/books",
            get(handlers::get_author_books).post(handlers::create_author_book),
        )
        .route(
            "/api/authors/:id/books/:book_id",
            delete(handlers::delete_author_book),
        )
}
