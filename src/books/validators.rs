use super::models::{CreateBookRequest, UpdateBookRequest};
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;

fn check_bounded_string(result: &mut ValidationResult, field: &str, value: &str) {
    // Limits are in characters, so count chars rather than bytes.
    let chars = value.chars().count();
    if chars < 3 {
        result.add_error(field, &format!("The {} must be at least 3 characters.", field));
    }
    if chars > 255 {
        result.add_error(
            field,
            &format!("The {} must not be greater than 255 characters.", field),
        );
    }
}

fn check_publication_date(result: &mut ValidationResult, value: &str) {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        result.add_error(
            "publication_date",
            "The publication date must be a valid date (YYYY-MM-DD).",
        );
    }
}

impl Validator<CreateBookRequest> for CreateBookRequest {
    fn validate(&self, data: &CreateBookRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) => check_bounded_string(&mut result, "name", name),
            None => result.add_error("name", "The name field is required."),
        }

        if data.category_id.is_none() {
            result.add_error("category_id", "The category id field is required.");
        }

        if data.price.is_none() {
            result.add_error("price", "The price field is required.");
        }

        match &data.publication_date {
            Some(date) => check_publication_date(&mut result, date),
            None => result.add_error(
                "publication_date",
                "The publication date field is required.",
            ),
        }

        if data.edition.is_none() {
            result.add_error("edition", "The edition field is required.");
        }

        if data.author_id.is_none() {
            result.add_error("author_id", "The author id field is required.");
        }

        match &data.isbn {
            Some(isbn) => check_bounded_string(&mut result, "isbn", isbn),
            None => result.add_error("isbn", "The isbn field is required."),
        }

        match &data.cover {
            Some(cover) => check_bounded_string(&mut result, "cover", cover),
            None => result.add_error("cover", "The cover field is required."),
        }

        result
    }
}

impl Validator<UpdateBookRequest> for UpdateBookRequest {
    fn validate(&self, data: &UpdateBookRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            check_bounded_string(&mut result, "name", name);
        }
        if let Some(date) = &data.publication_date {
            check_publication_date(&mut result, date);
        }
        if let Some(isbn) = &data.isbn {
            check_bounded_string(&mut result, "isbn", isbn);
        }
        if let Some(cover) = &data.cover {
            check_bounded_string(&mut result, "cover", cover);
        }

        result
    }
}
