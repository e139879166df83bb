use super::models::{CreateAuthorRequest, UpdateAuthorRequest};
use crate::common::{ValidationResult, Validator};

fn check_name(result: &mut ValidationResult, name: &str) {
    if name.trim().is_empty() {
        result.add_error("name", "The name field is required.");
    }
    if name.chars().count() > 255 {
        result.add_error("name", "The name must not be greater than 255 characters.");
    }
}

fn check_nationality(result: &mut ValidationResult, nationality: &str) {
    if nationality.trim().is_empty() {
        result.add_error("nationality", "The nationality field is required.");
    }
    if nationality.chars().count() > 255 {
        result.add_error(
            "nationality",
            "The nationality must not be greater than 255 characters.",
        );
    }
}

fn check_age(result: &mut ValidationResult, age: i64) {
    if age < 0 {
        result.add_error("age", "The age must be at least 0.");
    }
}

fn check_gender(result: &mut ValidationResult, gender: &str) {
    if gender.trim().is_empty() {
        result.add_error("gender", "The gender field is required.");
    }
    if gender.chars().count() > 50 {
        result.add_error("gender", "The gender must not be greater than 50 characters.");
    }
}

impl Validator<CreateAuthorRequest> for CreateAuthorRequest {
    fn validate(&self, data: &CreateAuthorRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) => check_name(&mut result, name),
            None => result.add_error("name", "The name field is required."),
        }

        match &data.nationality {
            Some(nationality) => check_nationality(&mut result, nationality),
            None => result.add_error("nationality", "The nationality field is required."),
        }

        match data.age {
            Some(age) => check_age(&mut result, age),
            None => result.add_error("age", "The age field is required."),
        }

        match &data.gender {
            Some(gender) => check_gender(&mut result, gender),
            None => result.add_error("gender", "The gender field is required."),
        }

        result
    }
}

impl Validator<UpdateAuthorRequest> for UpdateAuthorRequest {
    fn validate(&self, data: &UpdateAuthorRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            check_name(&mut result, name);
        }
        if let Some(nationality) = &data.nationality {
            check_nationality(&mut result, nationality);
        }
        if let Some(age) = data.age {
            check_age(&mut result, age);
        }
        if let Some(gender) = &data.gender {
            check_gender(&mut result, gender);
        }

        result
    }
}
