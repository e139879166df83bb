//! # Auth Module
//!
//! Handles all authentication-related functionality:
//! - Email/password login with bearer token issuance
//! - Token rotation (re-login revokes all prior tokens)
//! - AuthedUser extractor for protected routes
//! - User listing

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod services;
pub mod tokens;
pub mod validators;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
