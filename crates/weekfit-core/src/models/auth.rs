// ABOUTME: Request and response payloads for the login and registration endpoints
// ABOUTME: Credentials are never logged; Debug redacts the password
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::user::User;

/// `POST /auth/login` body
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Plain-text password, sent over TLS only
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// `POST /auth/register` body
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response of login and register
///
/// The service omits `token` when it refuses the request with a 2xx status
/// and a `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    #[serde(default)]
    pub token: Option<String>,
    /// User profile, when the service includes it
    #[serde(default)]
    pub user: Option<User>,
    /// Informational or error message
    #[serde(default)]
    pub message: Option<String>,
}
