// ABOUTME: Local input validation errors raised before any request is sent
// ABOUTME: Provides structured field-level errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Error Types
//!
//! Provides structured error types for form input checks:
//! - `ValidationError` - A single failed rule on a named field
//! - Conversion to `AppError` so callers can surface it through one channel

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// A failed validation rule on user-entered input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace
    Missing {
        /// Field label as shown to the user
        field: &'static str,
    },
    /// A form was submitted with empty fields
    Incomplete {
        /// What to fill in, e.g. "all fields"
        what: &'static str,
    },
    /// A numeric field was zero, negative, or not a number
    NotPositive {
        /// Field label as shown to the user
        field: &'static str,
        /// Unit hint appended to the message, e.g. "in minutes"
        unit: Option<&'static str>,
    },
    /// The email address has no `@`
    InvalidEmail,
    /// The password is shorter than the minimum length
    PasswordTooShort {
        /// Minimum accepted length
        min: usize,
    },
    /// Password and confirmation differ
    PasswordMismatch,
}

impl ValidationError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::Missing { field }
    }

    /// Create a "must be positive" error
    #[must_use]
    pub const fn not_positive(field: &'static str) -> Self {
        Self::NotPositive { field, unit: None }
    }

    /// Create a "must be positive" error with a unit hint
    #[must_use]
    pub const fn not_positive_in(field: &'static str, unit: &'static str) -> Self {
        Self::NotPositive {
            field,
            unit: Some(unit),
        }
    }

    /// Error code this validation failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Missing { .. } | Self::Incomplete { .. } => ErrorCode::MissingRequiredField,
            Self::NotPositive { .. } | Self::PasswordTooShort { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::InvalidEmail | Self::PasswordMismatch => ErrorCode::InvalidInput,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{field} is required"),
            Self::Incomplete { what } => write!(f, "Please fill in {what}"),
            Self::NotPositive { field, unit: None } => {
                write!(f, "{field} must be a positive number")
            }
            Self::NotPositive {
                field,
                unit: Some(unit),
            } => write!(f, "{field} must be a positive number ({unit})"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::PasswordTooShort { min } => {
                write!(f, "Password must be at least {min} characters")
            }
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}
