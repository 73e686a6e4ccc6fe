use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) secret_key: String,
    pub(crate) session_ttl_seconds: i64,
    pub(crate) http_addr: String,
    pub(crate) public_base_url: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) templates_dir: String,
    pub(crate) static_dir: String,
    pub(crate) mail_server: String,
    pub(crate) mail_port: u16,
    pub(crate) mail_username: String,
    pub(crate) mail_password: String,
    pub(crate) mail_sender: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = get_required("DATABASE_URL").context("DATABASE_URL is required")?;
        let secret_key = get_required("SECRET_KEY").context("SECRET_KEY is required")?;
        if secret_key.chars().count() < 32 {
            return Err(anyhow!("SECRET_KEY must be at least 32 characters"));
        }

        let session_ttl_seconds: i64 = std::env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .context("Failed to parse SESSION_TTL_SECONDS, expecting integer")?;
        if session_ttl_seconds <= 0 {
            return Err(anyhow!("SESSION_TTL_SECONDS must be > 0"));
        }

        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();
        let cors_origins = parse_cors_origins(
            std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string()),
        );
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_string());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let mail_server = get_required("MAIL_SERVER").context("MAIL_SERVER is required")?;
        let mail_port: u16 = get_required("MAIL_PORT")
            .context("MAIL_PORT is required")?
            .parse()
            .context("Failed to parse MAIL_PORT, expecting port number")?;
        let mail_username = get_required("MAIL_USERNAME").context("MAIL_USERNAME is required")?;
        let mail_password = get_required("MAIL_PASSWORD").context("MAIL_PASSWORD is required")?;
        let mail_sender =
            get_required("MAIL_DEFAULT_SENDER").context("MAIL_DEFAULT_SENDER is required")?;

        Ok(Self {
            database_url,
            secret_key,
            session_ttl_seconds,
            http_addr,
            public_base_url,
            cors_origins,
            log_level,
            templates_dir,
            static_dir,
            mail_server,
            mail_port,
            mail_username,
            mail_password,
            mail_sender,
        })
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
