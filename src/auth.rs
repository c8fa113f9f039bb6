// ABOUTME: Login and signup form validation performed before any request is sent
// ABOUTME: Turns raw form input into LoginRequest / RegisterRequest payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Credential forms
//!
//! Rules are checked in a fixed order and the first failure wins, so the user
//! sees one message at a time:
//!
//! 1. email and password present
//! 2. email contains `@`
//! 3. password at least six characters
//! 4. (signup) name present
//! 5. (signup) password and confirmation match

use weekfit_core::constants::limits::MIN_PASSWORD_LEN;
use weekfit_core::errors::ValidationError;
use weekfit_core::models::{LoginRequest, RegisterRequest};

/// Raw login input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: String,
}

impl LoginForm {
    /// Create a login form
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form and build the request payload
    ///
    /// # Errors
    ///
    /// Returns the first failed rule
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = check_credentials(&self.email, &self.password)?;
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw signup input
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Display name as typed
    pub name: String,
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: String,
    /// Password confirmation as typed
    pub confirm_password: String,
}

impl SignupForm {
    /// Check the form and build the request payload
    ///
    /// # Errors
    ///
    /// Returns the first failed rule
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let email = check_credentials(&self.email, &self.password)?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Incomplete { what: "your name" });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            email,
            password: self.password.clone(),
        })
    }
}

fn check_credentials(email: &str, password: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::Incomplete { what: "all fields" });
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(email.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: name.to_owned(),
            email: "sam@example.com".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
        }
    }

    #[test]
    fn test_login_rule_order() {
        let err = LoginForm::new("", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");

        let err = LoginForm::new("sam.example.com", "123").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);

        let err = LoginForm::new("sam@example.com", "12345").validate().unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[test]
    fn test_login_trims_email() {
        let request = LoginForm::new("  sam@example.com ", "secret1")
            .validate()
            .unwrap();
        assert_eq!(request.email, "sam@example.com");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn test_signup_requires_name_then_matching_passwords() {
        let err = signup("  ", "secret1", "secret1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in your name");

        let err = signup("Sam", "secret1", "secret2").validate().unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);

        let request = signup("Sam", "secret1", "secret1").validate().unwrap();
        assert_eq!(request.name, "Sam");
    }
}
