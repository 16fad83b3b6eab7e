use uuid::Uuid;

use crate::audit::domain::model::{
    enums::{
        audit_action::AuditAction, audit_domain_error::AuditDomainError,
        audit_outcome::AuditOutcome,
    },
    value_objects::audit_requester::AuditRequester,
};

#[derive(Clone, Debug)]
pub struct SearchAuditRecordsQuery {
    requested_by: AuditRequester,
    actor_user_id: Option<Uuid>,
    bucket_name: Option<String>,
    action: Option<AuditAction>,
    outcome: Option<AuditOutcome>,
    skip: u64,
    limit: Option<u32>,
}

pub struct SearchAuditRecordsQueryParts {
    pub requested_by: AuditRequester,
    pub actor_user_id: Option<String>,
    pub bucket_name: Option<String>,
    pub action_name: Option<String>,
    pub outcome_name: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u32>,
}

impl SearchAuditRecordsQuery {
    pub fn new(parts: SearchAuditRecordsQueryParts) -> Result<Self, AuditDomainError> {
        let actor_user_id = non_blank(parts.actor_user_id)
            .map(|raw| Uuid::parse_str(&raw).map_err(|_| AuditDomainError::InvalidActorId))
            .transpose()?;
        let action = non_blank(parts.action_name)
            .map(|raw| raw.parse::<AuditAction>())
            .transpose()?;
        let outcome = non_blank(parts.outcome_name)
            .map(|raw| raw.parse::<AuditOutcome>())
            .transpose()?;

        Ok(Self {
            requested_by: parts.requested_by,
            actor_user_id,
            bucket_name: non_blank(parts.bucket_name),
            action,
            outcome,
            skip: parts.skip.unwrap_or(0),
            limit: parts.limit,
        })
    }

    pub fn requested_by(&self) -> &AuditRequester {
        &self.requested_by
    }

    pub fn actor_user_id(&self) -> Option<Uuid> {
        self.actor_user_id
    }

    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }

    pub fn action(&self) -> Option<AuditAction> {
        self.action
    }

    pub fn outcome(&self) -> Option<AuditOutcome> {
        self.outcome
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}
