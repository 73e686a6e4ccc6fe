use axum::{
    Router,
    routing::{get, post},
};

use crate::presentation::AppState;
use crate::presentation::handlers::auth::{confirm, login, logout, register};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/confirm/{token}", get(confirm))
        .route("/login", post(login))
        .route("/logout", post(logout))
}
