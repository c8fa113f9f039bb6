// ABOUTME: HTTP client for the workout REST API built on reqwest
// ABOUTME: Maps transport and status failures onto AppError and logs every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;
use weekfit_core::constants::{defaults, endpoints};
use weekfit_core::errors::{AppError, AppResult, ErrorCode};
use weekfit_core::models::{
    ActivityId, ActivityProgress, AuthResponse, DayId, DayProgress, LoginRequest, NewActivity,
    ProgressRecord, RegisterRequest, User,
};

use crate::config::ClientConfig;
use crate::logging::AppLogger;

/// Error body shape returned by the service on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Deserialize)]
struct DayProgressEnvelope {
    #[serde(default)]
    progress: Vec<ProgressRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct ProgressEnvelope {
    #[serde(default)]
    progress: Option<ProgressRecord>,
}

/// Unauthenticated client: login, registration, and the factory for
/// [`AuthorizedClient`]
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(defaults::USER_AGENT)
            .build()
            .map_err(|e| AppError::internal("Failed to create HTTP client").with_source(e))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the service refuses the credentials or
    /// answers without a token
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        let builder = self.request(Method::POST, endpoints::LOGIN)?.json(request);
        let response = self.execute(builder, Method::POST, endpoints::LOGIN).await;
        let result = match response {
            Ok(response) => require_token(read_json(response).await?),
            Err(e) => Err(e),
        };
        AppLogger::log_auth_event(
            &request.email,
            "login",
            result.is_ok(),
            result.as_ref().err().map(|e| e.message.as_str()),
        );
        result
    }

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns an error when the service refuses the registration or answers
    /// without a token
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        let builder = self.request(Method::POST, endpoints::REGISTER)?.json(request);
        let response = self.execute(builder, Method::POST, endpoints::REGISTER).await;
        let result = match response {
            Ok(response) => require_token(read_json(response).await?),
            Err(e) => Err(e),
        };
        AppLogger::log_auth_event(
            &request.email,
            "register",
            result.is_ok(),
            result.as_ref().err().map(|e| e.message.as_str()),
        );
        result
    }

    /// Bind a bearer token for authenticated calls
    #[must_use]
    pub fn authorized(&self, token: impl Into<String>) -> AuthorizedClient {
        AuthorizedClient {
            api: self.clone(),
            token: token.into(),
        }
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| {
                AppError::config_invalid(format!("Cannot build URL for {path}")).with_source(e)
            })?;
        Ok(self.http.request(method, url))
    }

    async fn execute(
        &self,
        builder: RequestBuilder,
        method: Method,
        path: &str,
    ) -> AppResult<Response> {
        let started = Instant::now();
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_api_request(method.as_str(), path, status.as_u16(), elapsed);

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| default_status_message(status));
        debug!(%status, path, body = %text, "Request rejected by service");
        Err(AppError::from_status(status.as_u16(), message)
            .with_details(json!({ "method": method.as_str(), "path": path })))
    }
}

/// Client bound to a bearer token
#[derive(Clone)]
pub struct AuthorizedClient {
    api: ApiClient,
    token: String,
}

impl fmt::Debug for AuthorizedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedClient")
            .field("base_url", &self.api.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl AuthorizedClient {
    /// The bearer token this client sends
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> AppResult<Response> {
        let mut builder = self
            .api
            .request(method.clone(), path)?
            .bearer_auth(&self.token);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.api.execute(builder, method, path).await
    }

    /// `GET /auth/user`: the current user with populated days and activities
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the token is rejected
    pub async fn fetch_user(&self) -> AppResult<User> {
        let response = self.send(Method::GET, endpoints::FETCH_USER, None).await?;
        let envelope: UserEnvelope = read_json(response).await?;
        Ok(envelope.user)
    }

    /// `POST /activity/day/{day_id}/activity`
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the activity
    pub async fn add_activity(&self, day_id: &DayId, activity: &NewActivity) -> AppResult<()> {
        let body = serde_json::to_value(activity)?;
        self.send(
            Method::POST,
            &endpoints::add_activity(day_id.as_str()),
            Some(body),
        )
        .await?;
        Ok(())
    }

    /// `DELETE /activity/day/{day_id}/activity/{activity_id}`
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the deletion
    pub async fn delete_activity(
        &self,
        day_id: &DayId,
        activity_id: &ActivityId,
    ) -> AppResult<()> {
        self.send(
            Method::DELETE,
            &endpoints::delete_activity(day_id.as_str(), activity_id.as_str()),
            None,
        )
        .await?;
        Ok(())
    }

    /// `GET /progress/day/{day_id}`: progress for every activity under a day
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed
    pub async fn fetch_day_progress(&self, day_id: &DayId) -> AppResult<DayProgress> {
        let response = self
            .send(Method::GET, &endpoints::day_progress(day_id.as_str()), None)
            .await?;
        let envelope: DayProgressEnvelope = read_json(response).await?;
        Ok(ActivityProgress::index(envelope.progress))
    }

    /// `GET /progress/activity/{activity_id}/day/{day_id}`
    ///
    /// A 404 means no set has been recorded yet and yields zeroed progress.
    ///
    /// # Errors
    ///
    /// Returns an error for any other failure
    pub async fn fetch_activity_progress(
        &self,
        activity_id: &ActivityId,
        day_id: &DayId,
    ) -> AppResult<ActivityProgress> {
        let path = endpoints::activity_progress(activity_id.as_str(), day_id.as_str());
        match self.send(Method::GET, &path, None).await {
            Ok(response) => {
                let envelope: ProgressEnvelope = read_json(response).await?;
                Ok(envelope
                    .progress
                    .map_or_else(ActivityProgress::zeroed, ActivityProgress::from_record))
            }
            Err(e) if e.code == ErrorCode::ResourceNotFound => Ok(ActivityProgress::zeroed()),
            Err(e) => Err(e),
        }
    }

    /// `POST /progress/activity/{activity_id}/set` with `{ "sets": n }`
    ///
    /// Returns the updated progress when the service includes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the update
    pub async fn set_sets_completed(
        &self,
        activity_id: &ActivityId,
        sets: u32,
    ) -> AppResult<Option<ActivityProgress>> {
        let response = self
            .send(
                Method::POST,
                &endpoints::activity_sets(activity_id.as_str()),
                Some(json!({ "sets": sets })),
            )
            .await?;
        Ok(read_mutation_result(response).await)
    }

    /// `POST /progress/activity/{activity_id}/set` with an empty body: clears
    /// the activity's progress
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the reset
    pub async fn reset_sets(
        &self,
        activity_id: &ActivityId,
    ) -> AppResult<Option<ActivityProgress>> {
        let response = self
            .send(
                Method::POST,
                &endpoints::activity_sets(activity_id.as_str()),
                Some(json!({})),
            )
            .await?;
        Ok(read_mutation_result(response).await)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::new(
            ErrorCode::SerializationError,
            format!("Unexpected response from the workout service: {e}"),
        )
        .with_source(e)
    })
}

/// Mutation responses are not guaranteed to carry progress; anything that
/// does not decode to a progress record means "refetch"
async fn read_mutation_result(response: Response) -> Option<ActivityProgress> {
    let bytes = response.bytes().await.ok()?;
    if bytes.is_empty() {
        return None;
    }
    match serde_json::from_slice::<ProgressEnvelope>(&bytes) {
        Ok(envelope) => envelope.progress.map(ActivityProgress::from_record),
        Err(e) => {
            debug!(error = %e, "Mutation response carries no progress record");
            None
        }
    }
}

fn require_token(response: AuthResponse) -> AppResult<AuthResponse> {
    if response.token.as_deref().is_some_and(|t| !t.is_empty()) {
        Ok(response)
    } else {
        Err(AppError::auth_invalid(
            response
                .message
                .unwrap_or_else(|| "The service did not issue a token".to_owned()),
        ))
    }
}

fn transport_error(error: reqwest::Error) -> AppError {
    let message = if error.is_timeout() {
        "The workout service did not respond in time"
    } else if error.is_connect() {
        "Could not connect to the workout service"
    } else {
        "Request to the workout service failed"
    };
    AppError::new(ErrorCode::ExternalServiceUnavailable, message).with_source(error)
}

fn default_status_message(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || format!("Request failed with status {}", status.as_u16()),
        ToOwned::to_owned,
    )
}
