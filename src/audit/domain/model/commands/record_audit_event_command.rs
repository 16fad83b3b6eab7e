use serde_json::Value;
use uuid::Uuid;

use crate::audit::domain::model::{
    entities::audit_record::AuditRecordParts,
    enums::{
        audit_action::AuditAction, audit_domain_error::AuditDomainError,
        audit_outcome::AuditOutcome,
    },
};

#[derive(Clone, Debug)]
pub struct RecordAuditEventCommand {
    actor_user_id: Uuid,
    action: AuditAction,
    bucket_name: String,
    object_key: String,
    outcome: AuditOutcome,
    source_address: Option<String>,
    user_agent: Option<String>,
    context_metadata: Option<Value>,
    error_detail: Option<String>,
}

pub struct RecordAuditEventCommandParts {
    pub actor_user_id: Uuid,
    pub action_name: String,
    pub bucket_name: String,
    pub object_key: String,
    pub succeeded: bool,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
    pub context_metadata: Option<Value>,
    pub error_detail: Option<String>,
}

impl RecordAuditEventCommand {
    pub fn new(parts: RecordAuditEventCommandParts) -> Result<Self, AuditDomainError> {
        let action = parts.action_name.parse::<AuditAction>()?;
        let bucket_name = parts.bucket_name.trim().to_string();
        if bucket_name.is_empty() {
            return Err(AuditDomainError::InvalidBucketName);
        }

        Ok(Self {
            actor_user_id: parts.actor_user_id,
            action,
            bucket_name,
            object_key: parts.object_key,
            outcome: AuditOutcome::from_success(parts.succeeded),
            source_address: parts.source_address,
            user_agent: parts.user_agent,
            context_metadata: parts.context_metadata,
            error_detail: parts.error_detail,
        })
    }

    pub fn actor_user_id(&self) -> Uuid {
        self.actor_user_id
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    pub fn into_record_parts(self) -> AuditRecordParts {
        AuditRecordParts {
            actor_user_id: self.actor_user_id,
            action: self.action,
            bucket_name: self.bucket_name,
            object_key: self.object_key,
            outcome: self.outcome,
            source_address: self.source_address,
            user_agent: self.user_agent,
            context_metadata: self.context_metadata,
            error_detail: self.error_detail,
        }
    }
}
