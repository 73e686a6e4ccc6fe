use std::path::PathBuf;
use std::sync::Arc;

use crate::application::auth_service::AuthService;
use crate::application::item_service::ItemService;
use crate::application::profile_service::ProfileService;
use crate::data::repositories::postgres::item_repository::PostgresItemRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::mailer::SmtpMailer;
use crate::infrastructure::session::SessionCodec;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) auth_service: Arc<AuthService<PostgresUserRepository, SmtpMailer>>,
    pub(crate) profile_service: Arc<ProfileService<PostgresUserRepository>>,
    pub(crate) item_service: Arc<ItemService<PostgresItemRepository>>,
    pub(crate) sessions: Arc<SessionCodec>,
    pub(crate) index_template: Arc<PathBuf>,
}

impl AppState {
    pub(crate) fn new(
        auth_service: Arc<AuthService<PostgresUserRepository, SmtpMailer>>,
        profile_service: Arc<ProfileService<PostgresUserRepository>>,
        item_service: Arc<ItemService<PostgresItemRepository>>,
        sessions: Arc<SessionCodec>,
        index_template: Arc<PathBuf>,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            item_service,
            sessions,
            index_template,
        }
    }
}
