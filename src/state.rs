use crate::{config::ConnectionPool, di::DependenciesInject};
use anyhow::{Result, bail};
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    session_key: Key,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, session_secret: &str) -> Result<Self> {
        // Key::derive_from panics below 32 bytes of input material.
        if session_secret.len() < 32 {
            bail!("SESSION_SECRET must be at least 32 bytes long");
        }

        let session_key = Key::derive_from(session_secret.as_bytes());
        let di_container = DependenciesInject::new(pool);

        Ok(Self {
            di_container,
            session_key,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    fn lazy_pool() -> ConnectionPool {
        SqlitePoolOptions::new()
            .connect_lazy("sqlite::memory:")
            .expect("build lazy pool")
    }

    #[tokio::test]
    async fn derives_the_signing_key_from_a_long_secret() {
        let state = AppState::new(lazy_pool(), "a-secret-that-is-definitely-32-bytes!")
            .expect("state with valid secret");
        let _key = Key::from_ref(&state);
    }

    #[tokio::test]
    async fn rejects_session_secrets_below_32_bytes() {
        assert!(AppState::new(lazy_pool(), "too-short").is_err());
    }
}
