// ABOUTME: Unified error handling for the weekfit client with codes and context
// ABOUTME: Maps remote HTTP failures and local validation failures onto one AppError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the client can observe is folded into [`AppError`]: local
//! validation of user input, remote HTTP failures, token storage problems and
//! configuration mistakes. None of them is fatal to the process; callers turn
//! them into a user-visible message and keep their prior state.

mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// No session token is available
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,
    /// The remote service rejected the credentials or token
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    /// Input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was left empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric value is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resources (4000-4999)
    /// The requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External service (5000-5999)
    /// The remote service returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The remote service could not be reached or is failing
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration was loaded but is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Local token storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// A payload could not be encoded or decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status class this code corresponds to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::AuthRequired | Self::AuthInvalid => 401,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::InternalError
            | Self::StorageError
            | Self::SerializationError
            | Self::ConfigError
            | Self::ConfigInvalid => 500,
        }
    }

    /// User-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "Please log in to continue",
            Self::AuthInvalid => "The provided credentials are invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "The workout service reported an error",
            Self::ExternalServiceUnavailable => "The workout service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Local storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Map a remote HTTP status onto an error code
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthInvalid,
            404 => Self::ResourceNotFound,
            400 | 409 | 422 => Self::InvalidInput,
            500..=599 => Self::ExternalServiceUnavailable,
            _ => Self::ExternalServiceError,
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the remote resource involved, if any
    pub resource_id: Option<String>,
    /// Remote HTTP status, when the error came from the service
    pub status: Option<u16>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            status: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status class for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether the message can be shown as-is in an alert
    ///
    /// Validation and remote failures carry messages meant for the user;
    /// internal and storage failures fall back to the generic description.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(
            self.code,
            ErrorCode::InternalError | ErrorCode::StorageError | ErrorCode::SerializationError
        )
    }

    /// Text suitable for a blocking alert
    #[must_use]
    pub fn alert_message(&self) -> String {
        if self.is_user_facing() {
            self.message.clone()
        } else {
            self.code.description().to_owned()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for common errors
impl AppError {
    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Authentication required")
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Token storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Invalid configuration value
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Error built from a non-success remote HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let mut error = Self::new(ErrorCode::from_http_status(status), message);
        error.context.status = Some(status);
        error
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
