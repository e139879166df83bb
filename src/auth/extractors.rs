//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::services::AuthService;
use crate::common::{safe_email_log, safe_token_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Resolves the `Authorization: Bearer <token>` header to a non-revoked
/// token row and its user. Requests without a resolvable token are rejected
/// with 401 before the handler runs.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let header = match header {
            Some(h) => h,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("Unauthenticated.".to_string()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let token = if let Some(rest) = header.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            header
        };

        let auth_service = AuthService::new(app_state.db.clone());

        match auth_service.find_user_by_token(&token).await? {
            Some(user) => {
                let authed = AuthedUser {
                    id: user.id,
                    email: user.email,
                };
                debug!(
                    user_id = authed.id,
                    email = %safe_email_log(&authed.email),
                    token = %safe_token_log(&token),
                    "Bearer token resolved"
                );
                Ok(authed)
            }
            None => {
                warn!(
                    token = %safe_token_log(&token),
                    "Authentication failed: unknown or revoked token"
                );
                Err(ApiError::Unauthorized("Unauthenticated.".to_string()))
            }
        }
    }
}
