use super::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::books::models::Book;
use crate::common::{ApiError, Validator};
use sqlx::SqlitePool;
use tracing::info;

pub struct CategoriesService {
    db: SqlitePool,
}

impl CategoriesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all categories
    pub async fn get_all_categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id ASC")
                .fetch_all(&self.db)
                .await?;

        Ok(categories)
    }

    /// Get category by ID
    pub async fn get_category_by_id(&self, category_id: i64) -> Result<Category, ApiError> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
                .bind(category_id)
                .fetch_optional(&self.db)
                .await?
                .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

        Ok(category)
    }

    /// Create a new category
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let result = sqlx::query("INSERT INTO categories (name) VALUES (?)")
            .bind(&request.name)
            .execute(&self.db)
            .await?;

        let category_id = result.last_insert_rowid();

        info!(category_id, "Created category");

        self.get_category_by_id(category_id).await
    }

    /// Update an existing category (merge-patch)
    pub async fn update_category(
        &self,
        category_id: i64,
        request: UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        let validation_result = request.validate(&request);
        if !validation_result.is_valid {
            return Err(ApiError::from(validation_result));
        }

        let existing = self.get_category_by_id(category_id).await?;

        let name = request.name.unwrap_or(existing.name);

        sqlx::query("UPDATE categories SET name = ? WHERE id = ?")
            .bind(&name)
            .bind(category_id)
            .execute(&self.db)
            .await?;

        info!(category_id, "Updated category");

        self.get_category_by_id(category_id).await
    }

    /// Delete a category.
    ///
    /// Books referencing the category are left untouched; their category_id
    /// keeps pointing at the deleted row (recorded decision, DESIGN.md).
    pub async fn delete_category(&self, category_id: i64) -> Result<(), ApiError> {
        self.get_category_by_id(category_id).await?;

        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category_id)
            .execute(&self.db)
            .await?;

        info!(category_id, "Deleted category");

        Ok(())
    }

    /// Get a category together with all books referencing it
    pub async fn get_category_books(
        &self,
        category_id: i64,
    ) -> Result<(Category, Vec<Book>), ApiError> {
        let category = self.get_category_by_id(category_id).await?;

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, name, category_id, price, publication_date, edition, author_id, isbn, cover
            FROM books
            WHERE category_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.db)
        .await?;

        Ok((category, books))
    }

    /// Delete one book belonging to a category, with a distinct 404 when the
    /// book exists but sits in a different category.
    pub async fn delete_category_book(
        &self,
        category_id: i64,
        book_id: i64,
    ) -> Result<(), ApiError> {
        self.get_category_by_id(category_id).await?;

        let book: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM books WHERE id = ? AND category_id = ?")
                .bind(book_id)
                .bind(category_id)
                .fetch_optional(&self.db)
                .await?;

        if book.is_none() {
            return Err(ApiError::BookNotInParent(
                "Book not found for this category".to_string(),
            ));
        }

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(&self.db)
            .await?;

        info!(category_id, book_id, "Deleted book under category");

        Ok(())
    }
}
