use anyhow::Context;
use axum::{
    Json,
    extract::{Form, Path, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::{LoginRequest, RegisterRequest};
use crate::infrastructure::session::SESSION_COOKIE;
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct RegisterForm {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct LoginForm {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub(crate) message: String,
    pub(crate) user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Registered, or a payload-level error", body = MessageResponse)
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .register(RegisterRequest {
            username: form.username,
            email: form.email,
            password: form.password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Регистрация успешна. Проверьте почту для подтверждения.".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/confirm/{token}",
    tag = "auth",
    params(("token" = String, Path, description = "Single-use confirmation token")),
    responses(
        (status = 303, description = "Confirmed, session cookie set, redirect to /"),
        (status = 200, description = "Invalid or consumed token")
    )
)]
pub(crate) async fn confirm(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Response> {
    let user = state.auth_service.confirm(&token).await?;

    let headers = session_cookie_headers(&state, &user.username)?;
    Ok((headers, Redirect::to("/")).into_response())
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged in (session cookie set), or a payload-level error", body = LoginResponse)
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<(HeaderMap, Json<LoginResponse>)> {
    let user = state
        .auth_service
        .login(LoginRequest {
            email: form.email,
            password: form.password,
        })
        .await?;

    let headers = session_cookie_headers(&state, &user.username)?;
    Ok((
        headers,
        Json(LoginResponse {
            message: "Вход выполнен".to_string(),
            user: UserDto {
                id: user.id,
                username: user.username,
            },
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    )
)]
pub(crate) async fn logout() -> AppResult<(HeaderMap, Json<MessageResponse>)> {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .expires(cookie::time::OffsetDateTime::UNIX_EPOCH)
        .build();

    Ok((
        set_cookie_header(&cookie)?,
        Json(MessageResponse {
            message: "Выход выполнен".to_string(),
        }),
    ))
}

/// Full-replacement session cookie: http-only, Lax, fixed max-age.
fn session_cookie_headers(state: &AppState, username: &str) -> Result<HeaderMap, AppError> {
    let token = state
        .sessions
        .issue(username)
        .map_err(anyhow::Error::from)?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::seconds(
            state.sessions.ttl_seconds(),
        ))
        .build();

    set_cookie_header(&cookie)
}

fn set_cookie_header(cookie: &Cookie<'_>) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie.to_string()).context("session cookie is not a header value")?,
    );
    Ok(headers)
}
