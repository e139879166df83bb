use super::models::{AuthenticatedUser, User, UserSummary};
use super::password::verify_password;
use super::tokens::generate_token;
use crate::common::{safe_email_log, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct AuthService {
    db: SqlitePool,
}

impl AuthService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Authenticate with email/password and rotate the user's bearer token.
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe which accounts exist. On success, every previously
    /// issued token is deleted and exactly one new token is inserted, in a
    /// single transaction.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, ApiError> {
        let user: Option<User> =
            sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.db)
                .await?;

        let user = match user {
            Some(u) if verify_password(password, &u.password) => u,
            _ => {
                info!(email = %safe_email_log(email), "Login rejected");
                return Err(ApiError::Unauthorized(
                    "Invalid email or password".to_string(),
                ));
            }
        };

        let token = generate_token();
        let now = chrono::Utc::now().to_rfc3339();

        // Revoke-all-then-issue must be atomic so two concurrent logins for
        // the same account cannot leave more than one valid token.
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM api_tokens WHERE user_id = ?")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO api_tokens (user_id, token, created_at) VALUES (?, ?, ?)")
            .bind(user.id)
            .bind(&token)
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(user_id = user.id, email = %safe_email_log(&user.email), "User logged in");

        Ok(AuthenticatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
            token,
        })
    }

    /// List all users (password hash excluded by type)
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let users =
            sqlx::query_as::<_, UserSummary>("SELECT id, name, email FROM users ORDER BY id ASC")
                .fetch_all(&self.db)
                .await?;

        Ok(users)
    }

    /// Resolve a bearer token to its user, or None if the token was never
    /// issued or has been revoked by a later login.
    pub async fn find_user_by_token(&self, token: &str) -> Result<Option<UserSummary>, ApiError> {
        let user = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.name, u.email
            FROM api_tokens t
            JOIN users u ON u.id = t.user_id
            WHERE t.token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }
}
