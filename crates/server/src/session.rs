// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! This module provides Axum extractors that resolve the
//! `Authorization: Bearer <token>` header into an authenticated user.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use repairdesk_api::{AuthError, AuthenticatedActor, AuthenticationService};
use repairdesk_persistence::UserData;
use time::OffsetDateTime;
use tracing::{debug, error, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for authenticated users.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionUser(actor, user): SessionUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
///     // user: UserData
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing or malformed, or the
/// session is unknown or expired.
pub struct SessionUser(pub AuthenticatedActor, pub UserData);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(&parts.headers)?;
        let (actor, user) = resolve(state, token).await?;
        Ok(Self(actor, user))
    }
}

/// Extractor for endpoints that accept an optional session.
///
/// A missing header yields `None`. A header that is present but invalid
/// is still rejected.
pub struct OptionalSessionUser(pub Option<AuthenticatedActor>);

impl FromRequestParts<AppState> for OptionalSessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key("Authorization") {
            return Ok(Self(None));
        }
        let token: &str = bearer_token(&parts.headers)?;
        let (actor, _user) = resolve(state, token).await?;
        Ok(Self(Some(actor)))
    }
}

/// Returns the bearer token from the `Authorization` header.
///
/// # Errors
///
/// Returns an error if the header is missing, not valid ASCII, or does not
/// use the `Bearer` scheme.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let auth_header: &str = headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })
}

async fn resolve(
    state: &AppState,
    token: &str,
) -> Result<(AuthenticatedActor, UserData), SessionError> {
    let mut persistence = state.persistence.lock().await;
    let (actor, user) =
        AuthenticationService::validate_session(&mut persistence, token, OffsetDateTime::now_utc())
            .map_err(|e| match e {
                AuthError::Internal { message } => {
                    error!(error = %message, "Session lookup failed");
                    SessionError::Internal
                }
                other => {
                    warn!(error = %other, "Session validation failed");
                    SessionError::InvalidSession(other.to_string())
                }
            })?;

    debug!(user_id = actor.user_id, role = %actor.role, "Session validated");
    Ok((actor, user))
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
    /// The session store failed.
    Internal,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, kind, message): (StatusCode, &str, String) = match self {
            Self::MissingAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                String::from("Missing Authorization header"),
            ),
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                String::from("Invalid Authorization header format. Expected: 'Bearer <token>'"),
            ),
            Self::InvalidSession(reason) => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                format!("Session validation failed: {reason}"),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                String::from("Session store unavailable"),
            ),
        };

        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: kind.to_string(),
            message,
        });
        (status, body).into_response()
    }
}
