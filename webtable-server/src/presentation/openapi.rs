use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::auth::{
    LoginForm, LoginResponse, MessageResponse, RegisterForm, UserDto,
};
use crate::presentation::handlers::items::ItemForm;
use crate::presentation::handlers::profile::{ProfileDto, ProfileForm};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::register,
        crate::presentation::handlers::auth::confirm,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::logout,
        crate::presentation::handlers::profile::get_profile,
        crate::presentation::handlers::profile::save_profile,
        crate::presentation::handlers::items::add_item
    ),
    components(
        schemas(
            RegisterForm,
            LoginForm,
            MessageResponse,
            UserDto,
            LoginResponse,
            ProfileForm,
            ProfileDto,
            ItemForm
        )
    ),
    tags(
        (name = "auth", description = "Registration, confirmation and session endpoints"),
        (name = "profile", description = "Session-gated personal data"),
        (name = "items", description = "Item records")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("session"))),
        );
        openapi.components = Some(components);
    }
}
