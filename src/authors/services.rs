use super::models::{Author, CreateAuthorRequest, UpdateAuthorRequest};
use crate::books::models::{Book, CreateBookRequest};
use crate::books::services::BooksService;
use crate::common::{ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct AuthorsService {
    db: SqlitePool,
}

impl AuthorsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all authors
    pub async fn get_all_authors(&self) -> Result<Vec<Author>, ApiError> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, age, gender FROM authors ORDER BY id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(authors)
    }

    /// Get author by ID
    pub async fn get_author_by_id(&self, author_id: i64) -> Result<Author, ApiError> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, nationality, age, gender FROM authors WHERE id = ?",
        )
        .bind(author_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Author not found".to_string()))?;

        Ok(author)
    }

    /// Create a new author
    pub async fn create_author(&self, request: CreateAuthorRequest) -> Result<Author, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let result = sqlx::query(
            "INSERT INTO authors (name, nationality, age, gender) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.nationality)
        .bind(request.age)
        .bind(&request.gender)
        .execute(&self.db)
        .await?;

        let author_id = result.last_insert_rowid();

        info!(author_id, "Created author");

        self.get_author_by_id(author_id).await
    }

    /// Update an existing author (merge-patch: only supplied fields change)
    pub async fn update_author(
        &self,
        author_id: i64,
        request: UpdateAuthorRequest,
    ) -> Result<Author, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let existing = self.get_author_by_id(author_id).await?;

        let name = request.name.unwrap_or(existing.name);
        let nationality = request.nationality.unwrap_or(existing.nationality);
        let age = request.age.unwrap_or(existing.age);
        let gender = request.gender.unwrap_or(existing.gender);

        sqlx::query(
            "UPDATE authors SET name = ?, nationality = ?, age = ?, gender = ? WHERE id = ?",
        )
        .bind(&name)
        .bind(&nationality)
        .bind(age)
        .bind(&gender)
        .bind(author_id)
        .execute(&self.db)
        .await?;

        info!(author_id, "Updated author");

        self.get_author_by_id(author_id).await
    }

    /// Delete an author and cascade to its books.
    ///
    /// Child deletions and the parent deletion run in one transaction so a
    /// failure cannot leave books referencing a deleted author.
    pub async fn delete_author(&self, author_id: i64) -> Result<(), ApiError> {
        self.get_author_by_id(author_id).await?;

        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM books WHERE author_id = ?")
            .bind(author_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(author_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(author_id, "Deleted author and its books");

        Ok(())
    }

    /// Get an author together with all of its books
    pub async fn get_author_books(&self, author_id: i64) -> Result<(Author, Vec<Book>), ApiError> {
        let author = self.get_author_by_id(author_id).await?;

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, category_id, price, publication_date, edition, author_id, isbn, cover
            FROM books
            WHERE author_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.db)
        .await?;

        Ok((author, books))
    }

    /// Create a book under an author.
    ///
    /// The path id is authoritative: any author_id in the body is replaced
    /// before validation, so the book always lands under this author.
    pub async fn create_author_book(
        &self,
        author_id: i64,
        mut request: CreateBookRequest,
    ) -> Result<Book, ApiError> {
        self.get_author_by_id(author_id).await?;

        request.author_id = Some(author_id);

        let book = BooksService::new(self.db.clone())
            .create_book(request)
            .await?;

        info!(author_id, book_id = book.id, "Created book under author");

        Ok(book)
    }

    /// Delete one book belonging to an author.
    ///
    /// A book that exists but belongs to a different author is reported with
    /// a distinct 404 so callers can tell it apart from an unknown author.
    pub async fn delete_author_book(&self, author_id: i64, book_id: i64) -> Result<(), ApiError> {
        self.get_author_by_id(author_id).await?;

        let book: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM books WHERE id = ? AND author_id = ?")
                .bind(book_id)
                .bind(author_id)
                .fetch_optional(&self.db)
                .await?;

        if book.is_none() {
            return Err(ApiError::BookNotInParent(
                "Book not found for this author".to_string(),
            ));
        }

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(&self.db)
            .await?;

        info!(author_id, book_id, "Deleted book under author");

        Ok(())
    }
}
