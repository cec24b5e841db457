//! Field-shape validation rules.
//!
//! Rules are declared on the request types with `validator` attributes
//! (see [`crate::domain::user`]); this module holds the shared pieces and
//! turns validator output into per-field messages.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::config::USERNAME_PATTERN;
use crate::errors::{AppError, AppResult, FieldErrors};

/// Compiled username pattern
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(USERNAME_PATTERN).expect("USERNAME_PATTERN is a valid regex"));

/// Validate a request, reporting every offending field.
pub fn validate_request<T: Validate>(value: &T) -> AppResult<()> {
    value
        .validate()
        .map_err(|e| AppError::Validation(field_errors(&e)))
}

/// One message per offending field (the first violated constraint).
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_USERNAME_LENGTH, PASSWORD_LENGTH};
    use crate::domain::{CreateUser, PasswordChange};

    fn create(username: &str, password: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_new_password: confirm.to_string(),
        }
    }

    fn rejected_fields<T: Validate>(value: &T) -> Vec<String> {
        match validate_request(value) {
            Err(AppError::Validation(errors)) => errors.into_keys().collect(),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(()) => vec![],
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(validate_request(&create("tody@email.com", "123456")).is_ok());
        assert!(validate_request(&create("ana.maria+park@mail.com.br", "abcdef")).is_ok());
    }

    #[test]
    fn test_username_shape() {
        for username in ["", "tody", "tody@", "tody@email", "@email.com", "tody@email."] {
            assert_eq!(
                rejected_fields(&create(username, "123456")),
                vec!["username"],
                "username {:?} should be rejected",
                username
            );
        }
    }

    #[test]
    fn test_password_must_be_exactly_six_characters() {
        let exact = "7".repeat(PASSWORD_LENGTH as usize);
        assert!(validate_request(&create("tody@email.com", &exact)).is_ok());

        let short = "7".repeat(PASSWORD_LENGTH as usize - 1);
        let long = "7".repeat(PASSWORD_LENGTH as usize + 1);
        for password in ["", short.as_str(), long.as_str(), "12345678901"] {
            assert_eq!(
                rejected_fields(&create("tody@email.com", password)),
                vec!["password"],
                "password {:?} should be rejected",
                password
            );
        }
        assert!(validate_request(&create("tody@email.com", "a1b2c3")).is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Six characters, more than six bytes
        assert!(validate_request(&create("tody@email.com", "sénha!")).is_ok());
    }

    #[test]
    fn test_username_length_limit() {
        let domain = "@email.com";
        let local = "a".repeat(MAX_USERNAME_LENGTH as usize - domain.len());
        assert!(validate_request(&create(&format!("{}{}", local, domain), "123456")).is_ok());
        assert_eq!(
            rejected_fields(&create(&format!("a{}{}", local, domain), "123456")),
            vec!["username"]
        );
    }

    #[test]
    fn test_both_fields_reported() {
        assert_eq!(
            rejected_fields(&create("tody@", "123")),
            vec!["password", "username"]
        );
    }

    #[test]
    fn test_password_change_fields_validated_independently() {
        assert!(validate_request(&change("123456", "654321", "654321")).is_ok());

        assert_eq!(
            rejected_fields(&change("", "", "")),
            vec!["confirm_new_password", "current_password", "new_password"]
        );
        assert_eq!(
            rejected_fields(&change("12345", "123456", "123456")),
            vec!["current_password"]
        );
        assert_eq!(
            rejected_fields(&change("123456", "1234567", "123456")),
            vec!["new_password"]
        );
        assert_eq!(
            rejected_fields(&change("123456", "123456", "12345")),
            vec!["confirm_new_password"]
        );
    }

    #[test]
    fn test_mismatched_but_well_formed_passwords_pass_validation() {
        // Disagreement is a business rule, not a shape rule
        assert!(validate_request(&change("123456", "123456", "000000")).is_ok());
    }

    #[test]
    fn test_messages_are_human_readable() {
        let Err(AppError::Validation(errors)) = validate_request(&create("tody@email", "1"))
        else {
            panic!("expected validation error");
        };
        assert_eq!(errors["username"], "Username must be a valid email address");
        assert_eq!(errors["password"], "Password must have exactly 6 characters");
    }
}
