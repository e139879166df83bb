use super::models::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::common::{ValidationResult, Validator};

fn check_name(result: &mut ValidationResult, name: &str) {
    if name.trim().is_empty() {
        result.add_error("name", "The name field is required.");
    }
    if name.chars().count() > 255 {
        result.add_error("name", "The name must not be greater than 255 characters.");
    }
}

impl Validator<CreateCategoryRequest> for CreateCategoryRequest {
    fn validate(&self, data: &CreateCategoryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) => check_name(&mut result, name),
            None => result.add_error("name", "The name field is required."),
        }

        result
    }
}

impl Validator<UpdateCategoryRequest> for UpdateCategoryRequest {
    fn validate(&self, data: &UpdateCategoryRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            check_name(&mut result, name);
        }

        result
    }
}
