//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Login request validation
//! - Token rotation (exactly one valid token after re-login)
//! - Credential error uniformity
//! - Bearer token resolution

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{ApiError, Validator};
    use super::super::models::LoginRequest;
    use super::super::services::AuthService;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn setup_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        crate::common::migrations::run_migrations(&pool)
            .await
            .expect("migrations");
        pool
    }

    async fn insert_user(pool: &SqlitePool, name: &str, email: &str, plain_password: &str) -> i64 {
        let hash = password::hash_password(plain_password).expect("hash");
        sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(&hash)
            .execute(pool)
            .await
            .expect("insert user")
            .last_insert_rowid()
    }

    #[test]
    fn test_login_validation_requires_fields() {
        let request = LoginRequest {
            email: None,
            password: None,
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "email"));
        assert!(result.errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_login_validation_rejects_bad_email_shape() {
        let request = LoginRequest {
            email: Some("not-an-email".to_string()),
            password: Some("secret".to_string()),
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn test_login_validation_accepts_valid_request() {
        let request = LoginRequest {
            email: Some("john@example.com".to_string()),
            password: Some("secret".to_string()),
        };
        assert!(request.validate(&request).is_valid);
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials_issues_token() {
        let pool = setup_db().await;
        let user_id = insert_user(&pool, "John Doe", "john@example.com", "secret").await;

        let service = AuthService::new(pool.clone());
        let user = service
            .login("john@example.com", "secret")
            .await
            .expect("login should succeed");

        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "John Doe");
        assert!(!user.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_same_message() {
        let pool = setup_db().await;
        insert_user(&pool, "John Doe", "john@example.com", "secret").await;

        let service = AuthService::new(pool.clone());

        let unknown = service.login("nobody@example.com", "secret").await;
        let wrong = service.login("john@example.com", "wrong").await;

        let msg = |e: ApiError| match e {
            ApiError::Unauthorized(m) => m,
            other => panic!("expected Unauthorized, got {:?}", other),
        };

        assert_eq!(
            msg(unknown.expect_err("unknown email must fail")),
            msg(wrong.expect_err("wrong password must fail"))
        );
    }

    #[tokio::test]
    async fn test_relogin_leaves_exactly_one_token() {
        let pool = setup_db().await;
        let user_id = insert_user(&pool, "John Doe", "john@example.com", "secret").await;

        let service = AuthService::new(pool.clone());
        let first = service.login("john@example.com", "secret").await.unwrap();
        let second = service.login("john@example.com", "secret").await.unwrap();

        assert_ne!(first.token, second.token);

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM api_tokens WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 1, "re-login must leave exactly one valid token");

        // Old token is revoked, new token resolves
        assert!(service
            .find_user_by_token(&first.token)
            .await
            .unwrap()
            .is_none());
        assert!(service
            .find_user_by_token(&second.token)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_list_users_excludes_password() {
        let pool = setup_db().await;
        insert_user(&pool, "John Doe", "john@example.com", "secret").await;
        insert_user(&pool, "Jane Smith", "jane@example.com", "secret").await;

        let service = AuthService::new(pool.clone());
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        let serialized = serde_json::to_string(&users).unwrap();
        assert!(!serialized.contains("password"));
    }

    #[tokio::test]
    async fn test_find_user_by_unknown_token_is_none() {
        let pool = setup_db().await;
        let service = AuthService::new(pool.clone());
        assert!(service
            .find_user_by_token("NEVERISSUEDTOKEN")
            .await
            .unwrap()
            .is_none());
    }
}
