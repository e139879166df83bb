//! # Categories Module
//!
//! CRUD over categories plus the category→books relationship routes the
//! catalog exposes alongside the author ones. Deleting a category does not
//! cascade to its books (recorded decision, DESIGN.md).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::categories_routes;
