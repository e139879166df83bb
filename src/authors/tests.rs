//! Tests for authors module
//!
//! These tests verify author CRUD semantics including:
//! - Create/update validation rules
//! - Merge-patch updates
//! - Cascade delete of an author's books
//! - The distinct book-not-in-author error

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::books::models::CreateBookRequest;
    use crate::books::services::BooksService;
    use crate::common::{ApiError, Validator};
    use super::super::models::{CreateAuthorRequest, UpdateAuthorRequest};
    use super::super::services::AuthorsService;
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

    fn author_request(name: &str) -> CreateAuthorRequest {
        CreateAuthorRequest {
            name: Some(name.to_string()),
            nationality: Some("British".to_string()),
            age: Some(42),
            gender: Some("female".to_string()),
        }
    }

    fn book_request(author_id: i64, category_id: i64) -> CreateBookRequest {
        CreateBookRequest {
            name: Some("The Long Road".to_string()),
            category_id: Some(category_id),
            price: Some(19.99),
            publication_date: Some("2019-05-20".to_string()),
            edition: Some(2),
            author_id: Some(author_id),
            isbn: Some("9781234567897".to_string()),
            cover: Some("https://covers.example.com/long-road.png".to_string()),
        }
    }

    #[test]
    fn test_create_validation_requires_all_fields() {
        let request = CreateAuthorRequest {
            name: None,
            nationality: None,
            age: None,
            gender: None,
        };
        let result = request.validate(&request);
        assert!(!result.is_valid);
        for field in ["name", "nationality", "age", "gender"] {
            assert!(
                result.errors.iter().any(|e| e.field == field),
                "missing error for {}",
                field
            );
        }
    }

    #[test]
    fn test_create_validation_rejects_negative_age() {
        let mut request = author_request("Emma Clarke");
        request.age = Some(-1);
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "age"));
    }

    #[test]
    fn test_create_validation_rejects_long_name() {
        let request = author_request(&"a".repeat(256));
        let result = request.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn test_create_validation_counts_characters_not_bytes() {
        // 200 two-byte characters is 400 bytes but well under the limit
        let request = author_request(&"é".repeat(200));
        assert!(request.validate(&request).is_valid);

        let request = author_request(&"é".repeat(256));
        assert!(!request.validate(&request).is_valid);
    }

    #[test]
    fn test_update_validation_allows_partial_body() {
        let request = UpdateAuthorRequest {
            name: Some("New Name".to_string()),
            nationality: None,
            age: None,
            gender: None,
        };
        assert!(request.validate(&request).is_valid);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let pool = setup_db().await;
        let service = AuthorsService::new(pool.clone());

        let created = service
            .create_author(author_request("Emma Clarke"))
            .await
            .expect("create should succeed");

        // First row in a fresh database
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Emma Clarke");
        assert_eq!(created.nationality, "British");
        assert_eq!(created.age, 42);
        assert_eq!(created.gender, "female");

        let fetched = service.get_author_by_id(created.id).await.unwrap();
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.nationality, created.nationality);
        assert_eq!(fetched.age, created.age);
        assert_eq!(fetched.gender, created.gender);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let pool = setup_db().await;
        let service = AuthorsService::new(pool.clone());

        let created = service
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();

        let updated = service
            .update_author(
                created.id,
                UpdateAuthorRequest {
                    name: Some("Updated Name".to_string()),
                    nationality: None,
                    age: None,
                    gender: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Updated Name");
        assert_eq!(updated.nationality, "British");
        assert_eq!(updated.age, 42);
        assert_eq!(updated.gender, "female");
    }

    #[tokio::test]
    async fn test_update_unknown_author_is_not_found() {
        let pool = setup_db().await;
        let service = AuthorsService::new(pool.clone());

        let result = service
            .update_author(
                99,
                UpdateAuthorRequest {
                    name: Some("Ghost".to_string()),
                    nationality: None,
                    age: None,
                    gender: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_author_cascades_to_books() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());
        let books = BooksService::new(pool.clone());

        let author = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();
        let book1 = books.create_book(book_request(author.id, 1)).await.unwrap();
        let book2 = books.create_book(book_request(author.id, 1)).await.unwrap();

        authors.delete_author(author.id).await.unwrap();

        assert!(matches!(
            authors.get_author_by_id(author.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            books.get_book_by_id(book1.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            books.get_book_by_id(book2.id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_author_books_returns_only_that_authors_books() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());
        let books = BooksService::new(pool.clone());

        let emma = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();
        let other = authors
            .create_author(author_request("Liam Doyle"))
            .await
            .unwrap();

        books.create_book(book_request(emma.id, 1)).await.unwrap();
        books.create_book(book_request(emma.id, 1)).await.unwrap();
        books.create_book(book_request(other.id, 1)).await.unwrap();

        let (author, emma_books) = authors.get_author_books(emma.id).await.unwrap();
        assert_eq!(author.id, emma.id);
        assert_eq!(emma_books.len(), 2);
        assert!(emma_books.iter().all(|b| b.author_id == emma.id));
    }

    #[tokio::test]
    async fn test_get_author_books_unknown_author_is_not_found() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());

        assert!(matches!(
            authors.get_author_books(99).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_book_under_author_uses_path_id() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());
        let books = BooksService::new(pool.clone());

        let author = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();

        // The body names a different author; the path id must win
        let book = authors
            .create_author_book(author.id, book_request(999, 1))
            .await
            .unwrap();

        assert_eq!(book.author_id, author.id);
        assert!(books.get_book_by_id(book.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_book_under_unknown_author_is_not_found() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());

        assert!(matches!(
            authors.create_author_book(99, book_request(99, 1)).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_book_under_author_still_validates_body() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());

        let author = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();

        let mut request = book_request(author.id, 1);
        request.name = Some("ab".to_string());

        assert!(matches!(
            authors.create_author_book(author.id, request).await,
            Err(ApiError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_book_of_another_author_is_distinct_404() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());
        let books = BooksService::new(pool.clone());

        let author1 = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();
        let author2 = authors
            .create_author(author_request("Liam Doyle"))
            .await
            .unwrap();
        let book = books
            .create_book(book_request(author2.id, 1))
            .await
            .unwrap();

        let result = authors.delete_author_book(author1.id, book.id).await;
        match result {
            Err(ApiError::BookNotInParent(msg)) => {
                assert_eq!(msg, "Book not found for this author");
            }
            other => panic!("expected BookNotInParent, got {:?}", other),
        }

        // The book must remain persisted
        assert!(books.get_book_by_id(book.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_book_under_author_removes_only_that_book() {
        let pool = setup_db().await;
        let authors = AuthorsService::new(pool.clone());
        let books = BooksService::new(pool.clone());

        let author = authors
            .create_author(author_request("Emma Clarke"))
            .await
            .unwrap();
        let keep = books.create_book(book_request(author.id, 1)).await.unwrap();
        let gone = books.create_book(book_request(author.id, 1)).await.unwrap();

        authors.delete_author_book(author.id, gone.id).await.unwrap();

        assert!(books.get_book_by_id(keep.id).await.is_ok());
        assert!(matches!(
            books.get_book_by_id(gone.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(authors.get_author_by_id(author.id).await.is_ok());
    }
}
