use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::handlers::profile::{get_profile, save_profile};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).post(save_profile))
}
