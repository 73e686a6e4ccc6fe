use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

use crate::domain::error::DomainError;
use crate::infrastructure::session::{SESSION_COOKIE, Session};
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;

/// Decodes the `session` cookie once per request and stashes the result as
/// an extension. Runs on every route; handlers pick the state up through the
/// extractors below.
pub(crate) async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| {
            raw.split(';')
                .find_map(|kv| kv.trim().strip_prefix(&format!("{SESSION_COOKIE}=")))
        })
        .map(|token| state.sessions.authenticate(token))
        .unwrap_or(Session::Anonymous);

    request.extensions_mut().insert(session);

    next.run(request).await
}

/// The request's session, anonymous or not. Never rejects.
#[derive(Debug, Clone)]
pub(crate) struct CurrentSession(pub(crate) Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentSession(
            parts
                .extensions
                .get::<Session>()
                .cloned()
                .unwrap_or(Session::Anonymous),
        ))
    }
}

/// Extractor for session-gated handlers: rejects anonymous requests before
/// any database work happens.
#[derive(Debug, Clone)]
pub(crate) struct SessionUser {
    pub(crate) username: String,
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Session>() {
            Some(Session::Authenticated { username }) => Ok(SessionUser {
                username: username.clone(),
            }),
            _ => Err(AppError::Domain(DomainError::Unauthorized)),
        }
    }
}
