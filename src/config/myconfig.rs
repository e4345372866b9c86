use anyhow::{Context, Result, anyhow};

/// Known placeholder. Override with SESSION_SECRET before exposing the
/// service anywhere.
const DEFAULT_SESSION_SECRET: &str = "change-this-session-secret-in-production";

const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_secret: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let session_secret =
            std::env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string());

        let run_migrations = match std::env::var("RUN_MIGRATIONS").as_deref() {
            Ok("true") | Err(_) => true,
            Ok("false") => false,
            Ok(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        Ok(Self {
            database_url,
            port,
            session_secret,
            run_migrations,
        })
    }
}
