use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::audit::domain::model::{
    enums::{audit_action::AuditAction, audit_outcome::AuditOutcome},
    value_objects::audit_record_id::AuditRecordId,
};

pub const UNKNOWN_SOURCE_ADDRESS: &str = "unknown";

/// Immutable ledger entry. There is no way to change a record once built.
#[derive(Clone, Debug)]
pub struct AuditRecord {
    id: AuditRecordId,
    actor_user_id: Uuid,
    action: AuditAction,
    bucket_name: String,
    object_key: String,
    outcome: AuditOutcome,
    source_address: String,
    user_agent: Option<String>,
    context_metadata: Option<Value>,
    error_detail: Option<String>,
    recorded_at: DateTime<Utc>,
}

pub struct AuditRecordParts {
    pub actor_user_id: Uuid,
    pub action: AuditAction,
    pub bucket_name: String,
    pub object_key: String,
    pub outcome: AuditOutcome,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
    pub context_metadata: Option<Value>,
    pub error_detail: Option<String>,
}

impl AuditRecord {
    pub fn record(parts: AuditRecordParts, recorded_at: DateTime<Utc>) -> Self {
        Self::restore(AuditRecordId::new_random(), parts, recorded_at)
    }

    pub fn restore(id: AuditRecordId, parts: AuditRecordParts, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id,
            actor_user_id: parts.actor_user_id,
            action: parts.action,
            bucket_name: parts.bucket_name,
            object_key: parts.object_key,
            outcome: parts.outcome,
            source_address: parts
                .source_address
                .unwrap_or_else(|| UNKNOWN_SOURCE_ADDRESS.to_string()),
            user_agent: parts.user_agent,
            context_metadata: parts.context_metadata,
            error_detail: parts.error_detail,
            recorded_at,
        }
    }

    pub fn id(&self) -> AuditRecordId {
        self.id
    }

    pub fn actor_user_id(&self) -> Uuid {
        self.actor_user_id
    }

    pub fn action(&self) -> AuditAction {
        self.action
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn context_metadata(&self) -> Option<&Value> {
        self.context_metadata.as_ref()
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
