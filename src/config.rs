//! Runtime configuration for the villain roster service.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Postgres connection string.
    pub database_url: String,
    /// Upper bound on pooled Postgres connections.
    pub db_max_connections: u32,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8084".into());

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/villains_database".into());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        Settings {
            server_addr,
            database_url,
            db_max_connections,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
