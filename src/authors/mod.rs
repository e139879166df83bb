//! # Authors Module
//!
//! CRUD over authors plus the author→books relationship:
//! listing an author's books and deleting a single book under an author.
//! Deleting an author cascades to its books inside one transaction.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::authors_routes;
