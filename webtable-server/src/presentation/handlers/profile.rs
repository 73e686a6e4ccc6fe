use axum::{
    Json,
    extract::{Form, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::{Profile, ProfileUpdate};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::auth::MessageResponse;
use crate::presentation::middleware::session::SessionUser;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ProfileDto {
    pub(crate) name: Option<String>,
    pub(crate) surname: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) telegram: Option<String>,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            name: profile.name,
            surname: profile.surname,
            class: profile.class,
            telegram: profile.telegram,
        }
    }
}

/// Форма шлёт `class_`, ответ отдаёт `class` — как в исходном API.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ProfileForm {
    pub(crate) name: String,
    pub(crate) surname: String,
    #[serde(rename = "class_")]
    pub(crate) class: String,
    pub(crate) telegram: String,
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile fields, or a payload-level error", body = ProfileDto)
    )
)]
pub(crate) async fn get_profile(
    State(state): State<AppState>,
    user: SessionUser,
) -> AppResult<Json<ProfileDto>> {
    let profile = state.profile_service.get_profile(&user.username).await?;

    Ok(Json(ProfileDto::from(profile)))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "profile",
    request_body(content = ProfileForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Saved, or a payload-level error", body = MessageResponse)
    )
)]
pub(crate) async fn save_profile(
    State(state): State<AppState>,
    user: SessionUser,
    Form(form): Form<ProfileForm>,
) -> AppResult<Json<MessageResponse>> {
    state
        .profile_service
        .save_profile(
            &user.username,
            ProfileUpdate {
                name: form.name,
                surname: form.surname,
                class: form.class,
                telegram: form.telegram,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "Данные сохранены".to_string(),
    }))
}
