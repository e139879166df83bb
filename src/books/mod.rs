//! # Books Module
//!
//! CRUD over books. A book references an author and a category by id;
//! neither reference is checked for existence on create/update (see
//! DESIGN.md for the recorded decision).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::books_routes;
