use async_trait::async_trait;

use crate::audit::domain::model::{
    commands::record_audit_event_command::RecordAuditEventCommand,
    entities::audit_record::AuditRecord, enums::audit_domain_error::AuditDomainError,
};

#[async_trait]
pub trait AuditRecordCommandService: Send + Sync {
    /// Appends one record. Failed appends are logged and counted before the
    /// error is returned.
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditRecord, AuditDomainError>;

    /// Appends that failed since the process started.
    fn failed_append_count(&self) -> u64;
}
