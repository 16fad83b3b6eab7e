use std::str::FromStr;

use crate::access_control::domain::model::enums::grant_selection_policy::GrantSelectionPolicy;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PersistenceBackend {
    Postgres,
    Memory,
}

impl FromStr for PersistenceBackend {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" | "in_memory" => Ok(Self::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub persistence_backend: PersistenceBackend,
    pub grant_selection_policy: GrantSelectionPolicy,
    pub audit_default_query_limit: u32,
    pub audit_max_query_limit: u32,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let audit_max_query_limit = std::env::var("AUDIT_MAX_QUERY_LIMIT")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(500);

        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "bucket_warden".to_string()),
            persistence_backend: std::env::var("PERSISTENCE_BACKEND")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(PersistenceBackend::Postgres),
            grant_selection_policy: std::env::var("GRANT_SELECTION_POLICY")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            audit_default_query_limit: std::env::var("AUDIT_DEFAULT_QUERY_LIMIT")
                .ok()
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(100)
                .min(audit_max_query_limit),
            audit_max_query_limit,
            log_filter: std::env::var("LOG_FILTER").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}
