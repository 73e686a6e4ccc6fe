use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::domain::error::DomainError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Ошибки предметной области уходят клиенту как HTTP 200 с полем `error`:
/// фронтенд различает успех и отказ по телу ответа, не по статусу.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Domain(err) => match &err {
                DomainError::AlreadyExists(_) => (
                    StatusCode::OK,
                    "Пользователь с таким логином или email уже существует",
                ),
                DomainError::InvalidToken => (StatusCode::OK, "Неверный или устаревший токен"),
                DomainError::InvalidCredentials => (StatusCode::OK, "Неверный email или пароль"),
                DomainError::NotConfirmed => {
                    (StatusCode::OK, "Email не подтверждён. Проверьте почту.")
                }
                DomainError::Unauthorized => (StatusCode::OK, "Не авторизован"),
                DomainError::NotFound(_) => (StatusCode::OK, "Пользователь не найден"),
                DomainError::MailDelivery(_) => (
                    StatusCode::OK,
                    "Не удалось отправить письмо. Попробуйте позже.",
                ),
                DomainError::ProfileNotSaved(_) => {
                    (StatusCode::OK, "Не удалось сохранить данные")
                }
                DomainError::Unexpected(_) => {
                    error!("unexpected domain error: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
                }
            },
            AppError::Internal(err) => {
                error!("internal error: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        (
            status,
            Json(ErrorBody {
                error: msg.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::AppError;
    use crate::domain::error::DomainError;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        serde_json::from_slice(&bytes).expect("body must be json")
    }

    #[tokio::test]
    async fn domain_errors_are_ok_with_error_field() {
        let response = AppError::Domain(DomainError::Unauthorized).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Не авторизован");
    }

    #[tokio::test]
    async fn invalid_token_has_exact_message() {
        let response = AppError::Domain(DomainError::InvalidToken).into_response();
        let json = body_json(response).await;
        assert_eq!(json["error"], "Неверный или устаревший токен");
    }

    #[tokio::test]
    async fn unexpected_errors_are_internal() {
        let response =
            AppError::Domain(DomainError::Unexpected("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "internal error");
    }
}
