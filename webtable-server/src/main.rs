use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::auth_service::AuthService;
use application::item_service::ItemService;
use application::profile_service::ProfileService;
use data::repositories::postgres::item_repository::PostgresItemRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::mailer::SmtpMailer;
use infrastructure::session::SessionCodec;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let sessions = Arc::new(SessionCodec::new(
        &settings.secret_key,
        settings.session_ttl_seconds,
    ));
    let mailer = SmtpMailer::new(&settings)?;

    let auth_service = Arc::new(AuthService::new(
        PostgresUserRepository::new(pool.clone()),
        mailer,
    ));
    let profile_service = Arc::new(ProfileService::new(PostgresUserRepository::new(pool.clone())));
    let item_service = Arc::new(ItemService::new(PostgresItemRepository::new(pool)));

    let index_template = Arc::new(Path::new(&settings.templates_dir).join("index.html"));

    let state = AppState::new(
        auth_service,
        profile_service,
        item_service,
        sessions,
        index_template,
    );

    server::run_http(&settings, state).await
}
