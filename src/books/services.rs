use super::models::{Book, CreateBookRequest, UpdateBookRequest};
use crate::common::{ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct BooksService {
    db: SqlitePool,
}

impl BooksService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all books
    pub async fn get_all_books(&self) -> Result<Vec<Book>, ApiError> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, category_id, price, publication_date, edition, author_id, isbn, cover
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_book_by_id(&self, book_id: i64) -> Result<Book, ApiError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, category_id, price, publication_date, edition, author_id, isbn, cover
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(book_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Book not found".to_string()))?;

        Ok(book)
    }

    /// Create a new book.
    ///
    /// author_id and category_id are validated as integers only; whether the
    /// referenced rows exist is not checked (recorded decision, DESIGN.md).
    pub async fn create_book(&self, request: CreateBookRequest) -> Result<Book, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO books (name, category_id, price, publication_date, edition, author_id, isbn, cover)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(request.category_id)
        .bind(request.price)
        .bind(&request.publication_date)
        .bind(request.edition)
        .bind(request.author_id)
        .bind(&request.isbn)
        .bind(&request.cover)
        .execute(&self.db)
        .await?;

        let book_id = result.last_insert_rowid();

        info!(book_id, "Created book");

        self.get_book_by_id(book_id).await
    }

    /// Update an existing book (merge-patch: only supplied fields change)
    pub async fn update_book(
        &self,
        book_id: i64,
        request: UpdateBookRequest,
    ) -> Result<Book, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let existing = self.get_book_by_id(book_id).await?;

        let name = request.name.unwrap_or(existing.name);
        let category_id = request.category_id.unwrap_or(existing.category_id);
        let price = request.price.unwrap_or(existing.price);
        let publication_date = request
            .publication_date
            .unwrap_or(existing.publication_date);
        let edition = request.edition.unwrap_or(existing.edition);
        let author_id = request.author_id.unwrap_or(existing.author_id);
        let isbn = request.isbn.or(existing.isbn);
        let cover = request.cover.or(existing.cover);

        sqlx::query(
            r#"
            UPDATE books
            SET name = ?, category_id = ?, price = ?, publication_date = ?,
                edition = ?, author_id = ?, isbn = ?, cover = ?
            WHERE id = ?
            "#,
        )
        .bind(&name)
        .bind(category_id)
        .bind(price)
        .bind(&publication_date)
        .bind(edition)
        .bind(author_id)
        .bind(&isbn)
        .bind(&cover)
        .bind(book_id)
        .execute(&self.db)
        .await?;

        info!(book_id, "Updated book");

        self.get_book_by_id(book_id).await
    }

    /// Delete a book. Does not touch its author or category rows.
    pub async fn delete_book(&self, book_id: i64) -> Result<(), ApiError> {
        self.get_book_by_id(book_id).await?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(&self.db)
            .await?;

        info!(book_id, "Deleted book");

        Ok(())
    }
}
