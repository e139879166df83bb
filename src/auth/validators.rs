use super::models::LoginRequest;
use crate::common::{ValidationResult, Validator};

impl Validator<LoginRequest> for LoginRequest {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.email {
            None => result.add_error("email", "The email field is required."),
            Some(email) if email.trim().is_empty() => {
                result.add_error("email", "The email field is required.")
            }
            Some(email) => {
                if !is_plausible_email(email) {
                    result.add_error("email", "The email must be a valid email address.");
                }
            }
        }

        match &data.password {
            None => result.add_error("password", "The password field is required."),
            Some(password) if password.is_empty() => {
                result.add_error("password", "The password field is required.")
            }
            Some(_) => {}
        }

        result
    }
}

/// Minimal email shape check: one '@' with a dotted domain after it
fn is_plausible_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
