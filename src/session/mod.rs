// ABOUTME: Explicit session context replacing ambient current-user state
// ABOUTME: SessionManager owns the login/restore/logout lifecycle and the token store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session
//!
//! A [`Session`] is the authenticated context: the bearer-token client plus
//! the current [`User`]. Only [`SessionManager`] creates one, and the only
//! write path is [`SessionManager::refresh_user`], which swaps the user
//! wholesale. Logging out consumes the session so no stale handle survives.

/// Token persistence
pub mod store;

pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};

use tracing::{info, warn};
use weekfit_core::errors::{AppError, AppResult, ErrorCode};
use weekfit_core::models::{AuthResponse, User};

use crate::api::{ApiClient, AuthorizedClient};
use crate::auth::{LoginForm, SignupForm};

/// Authenticated context passed explicitly to everything that needs it
#[derive(Debug, Clone)]
pub struct Session {
    client: AuthorizedClient,
    user: User,
}

impl Session {
    /// Client bound to this session's token
    #[must_use]
    pub const fn client(&self) -> &AuthorizedClient {
        &self.client
    }

    /// Current user with the populated week schedule
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }
}

/// Creates, refreshes and tears down sessions
#[derive(Debug)]
pub struct SessionManager<S: TokenStore> {
    api: ApiClient,
    store: S,
}

impl<S: TokenStore> SessionManager<S> {
    /// Manager over `api` persisting tokens in `store`
    pub const fn new(api: ApiClient, store: S) -> Self {
        Self { api, store }
    }

    /// The unauthenticated client
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Resume from the stored token
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no token is stored or the service rejects
    /// it (the stale token is removed). Other failures, such as the service
    /// being unreachable, are returned unchanged and the token is kept.
    pub async fn restore(&self) -> AppResult<Session> {
        let token = self.store.load()?.ok_or_else(AppError::auth_required)?;
        let client = self.api.authorized(token);
        match client.fetch_user().await {
            Ok(user) => {
                info!(user.id = %user.id, "Session restored");
                Ok(Session { client, user })
            }
            Err(e) if e.code == ErrorCode::AuthInvalid => {
                warn!("Stored token rejected, clearing it");
                self.store.clear()?;
                Err(AppError::auth_required().with_source(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Validate credentials, log in, persist the token and load the user
    ///
    /// # Errors
    ///
    /// Returns the validation error before any request is sent, or the remote
    /// failure
    pub async fn login(&self, form: &LoginForm) -> AppResult<Session> {
        let request = form.validate()?;
        let response = self.api.login(&request).await?;
        self.establish(response).await
    }

    /// Validate the signup form, register, persist the token and load the user
    ///
    /// # Errors
    ///
    /// Returns the validation error before any request is sent, or the remote
    /// failure
    pub async fn register(&self, form: &SignupForm) -> AppResult<Session> {
        let request = form.validate()?;
        let response = self.api.register(&request).await?;
        self.establish(response).await
    }

    async fn establish(&self, response: AuthResponse) -> AppResult<Session> {
        let token = response
            .token
            .ok_or_else(|| AppError::auth_invalid("The service did not issue a token"))?;
        self.store.save(&token)?;
        let client = self.api.authorized(token);
        let user = client.fetch_user().await?;
        info!(user.id = %user.id, "Session established");
        Ok(Session { client, user })
    }

    /// Reload the user (and with it the week schedule) from the service
    ///
    /// # Errors
    ///
    /// Returns the remote failure; the session keeps its previous user
    pub async fn refresh_user(&self, session: &mut Session) -> AppResult<()> {
        let user = session.client.fetch_user().await?;
        session.user = user;
        Ok(())
    }

    /// End the session and forget its token
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token cannot be removed
    pub fn logout(&self, session: Session) -> AppResult<()> {
        info!(user.id = %session.user.id, "Logging out");
        drop(session);
        self.store.clear()
    }

    /// Forget any stored token without a live session
    ///
    /// # Errors
    ///
    /// Returns a storage error if the token cannot be removed
    pub fn forget(&self) -> AppResult<()> {
        self.store.clear()
    }
}
