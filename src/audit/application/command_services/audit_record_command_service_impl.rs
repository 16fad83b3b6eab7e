use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;

use crate::audit::{
    domain::{
        model::{
            commands::record_audit_event_command::RecordAuditEventCommand,
            entities::audit_record::AuditRecord, enums::audit_domain_error::AuditDomainError,
        },
        services::audit_record_command_service::AuditRecordCommandService,
    },
    infrastructure::persistence::repositories::audit_record_repository::AuditRecordRepository,
};

pub struct AuditRecordCommandServiceImpl {
    audit_record_repository: Arc<dyn AuditRecordRepository>,
    failed_appends: AtomicU64,
}

impl AuditRecordCommandServiceImpl {
    pub fn new(audit_record_repository: Arc<dyn AuditRecordRepository>) -> Self {
        Self {
            audit_record_repository,
            failed_appends: AtomicU64::new(0),
        }
    }

    fn mirror_to_log(record: &AuditRecord) {
        if record.outcome().is_success() {
            tracing::info!(
                audit_record_id = %record.id(),
                actor_user_id = %record.actor_user_id(),
                action = %record.action(),
                bucket = record.bucket_name(),
                key = record.object_key(),
                source_address = record.source_address(),
                "storage access succeeded"
            );
        } else {
            tracing::error!(
                audit_record_id = %record.id(),
                actor_user_id = %record.actor_user_id(),
                action = %record.action(),
                bucket = record.bucket_name(),
                key = record.object_key(),
                source_address = record.source_address(),
                error_detail = record.error_detail().unwrap_or_default(),
                "storage access failed"
            );
        }
    }
}

#[async_trait]
impl AuditRecordCommandService for AuditRecordCommandServiceImpl {
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditRecord, AuditDomainError> {
        let record = AuditRecord::record(command.into_record_parts(), Utc::now());

        if let Err(error) = self.audit_record_repository.append(&record).await {
            let failed_appends = self.failed_appends.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::error!(
                audit_record_id = %record.id(),
                actor_user_id = %record.actor_user_id(),
                action = %record.action(),
                failed_appends,
                error = %error,
                "audit record append failed"
            );
            return Err(error);
        }

        Self::mirror_to_log(&record);
        Ok(record)
    }

    fn failed_append_count(&self) -> u64 {
        self.failed_appends.load(Ordering::Relaxed)
    }
}
