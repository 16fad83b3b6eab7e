use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    access_control::infrastructure::persistence::repositories::{
        access_grant_repository::AccessGrantRepository,
        in_memory::in_memory_access_grant_repository_impl::InMemoryAccessGrantRepositoryImpl,
        postgres::sqlx_access_grant_repository_impl::SqlxAccessGrantRepositoryImpl,
    },
    audit::infrastructure::persistence::repositories::{
        audit_record_repository::AuditRecordRepository,
        in_memory::in_memory_audit_record_repository_impl::InMemoryAuditRecordRepositoryImpl,
        postgres::sqlx_audit_record_repository_impl::SqlxAuditRecordRepositoryImpl,
    },
    config::app_config::{AppConfig, PersistenceBackend},
};

/// Repositories built once per process and handed to every bounded context.
#[derive(Clone)]
pub struct RepositoryRegistry {
    pub access_grant_repository: Arc<dyn AccessGrantRepository>,
    pub audit_record_repository: Arc<dyn AuditRecordRepository>,
}

impl RepositoryRegistry {
    pub async fn connect(config: &AppConfig) -> Result<Self, String> {
        match config.persistence_backend {
            PersistenceBackend::Memory => {
                tracing::warn!("using in-memory persistence, data is lost on restart");
                Ok(Self::in_memory())
            }
            PersistenceBackend::Postgres => {
                let pool = PgPool::connect(&config.database_url())
                    .await
                    .map_err(|e| e.to_string())?;

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .map_err(|e| e.to_string())?;

                tracing::info!(
                    host = %config.postgres_host,
                    database = %config.postgres_database,
                    "postgres persistence ready"
                );

                Ok(Self {
                    access_grant_repository: Arc::new(SqlxAccessGrantRepositoryImpl::new(
                        pool.clone(),
                    )),
                    audit_record_repository: Arc::new(SqlxAuditRecordRepositoryImpl::new(pool)),
                })
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            access_grant_repository: Arc::new(InMemoryAccessGrantRepositoryImpl::new()),
            audit_record_repository: Arc::new(InMemoryAuditRecordRepositoryImpl::new()),
        }
    }
}
