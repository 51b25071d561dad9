//! Middleware for session cookie validation and authentication

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// Name of the cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "mis_session";

/// Resolve the request's session cookie to an active session
///
/// Runs before body parsing and before any repository access, so an
/// unauthenticated request never reaches the data layer regardless of
/// its payload. The resolved session is inserted into request
/// extensions for handlers that need the acting identity.
pub async fn session_guard(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(req.headers());
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(ApiError::Unauthorized)?;

    let session = state
        .sessions
        .lookup(&token)
        .await
        .map_err(|e| {
            error!("Failed to look up session: {}", e);
            ApiError::Internal("Could not verify the session".to_string())
        })?
        .ok_or(ApiError::Unauthorized)?;

    // The lookup already filters expired rows in SQL; re-check here so a
    // session fetched at the expiry boundary still counts as no session.
    if session.is_expired(Utc::now()) {
        return Err(ApiError::Unauthorized);
    }

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
