use axum::Router;
use axum::routing::{get, post};

use super::AppState;
use crate::presentation::handlers::{items, pages};

pub(crate) mod auth;
pub(crate) mod profile;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", post(items::add_item))
        .nest("/api", auth::router().merge(profile::router()))
}
