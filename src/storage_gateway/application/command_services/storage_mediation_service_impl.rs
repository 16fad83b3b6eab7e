use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::storage_gateway::{
    domain::{
        model::{
            commands::{
                authorize_storage_operation_command::AuthorizeStorageOperationCommand,
                report_operation_outcome_command::ReportOperationOutcomeCommand,
            },
            enums::{
                storage_gateway_domain_error::StorageGatewayDomainError,
                storage_operation::StorageOperation,
            },
        },
        services::storage_mediation_service::{
            OperationOutcomeReceipt, StorageAccessAuthorization, StorageMediationService,
        },
    },
    interfaces::acl::{
        storage_access_facade::StorageAccessFacade,
        storage_audit_facade::{StorageAuditEntry, StorageAuditFacade},
    },
};

pub struct StorageMediationServiceImpl {
    access_facade: Arc<dyn StorageAccessFacade>,
    audit_facade: Arc<dyn StorageAuditFacade>,
}

impl StorageMediationServiceImpl {
    pub fn new(
        access_facade: Arc<dyn StorageAccessFacade>,
        audit_facade: Arc<dyn StorageAuditFacade>,
    ) -> Self {
        Self {
            access_facade,
            audit_facade,
        }
    }

    fn entry(
        command: &AuthorizeStorageOperationCommand,
        action_name: &'static str,
        succeeded: bool,
    ) -> StorageAuditEntry {
        StorageAuditEntry {
            actor: command.actor().clone(),
            action_name,
            bucket_name: command.bucket_name().to_string(),
            object_key: command.object_key().to_string(),
            succeeded,
            context_metadata: None,
            error_detail: None,
        }
    }

    /// Appends without letting a ledger failure change the decision.
    async fn record_best_effort(&self, entry: StorageAuditEntry) -> Option<Uuid> {
        let actor_user_id = entry.actor.user_id;
        let action = entry.action_name;

        match self.audit_facade.record(entry).await {
            Ok(receipt) => Some(receipt.record_id),
            Err(error) => {
                tracing::error!(
                    actor_user_id = %actor_user_id,
                    action,
                    error = %error,
                    "continuing without audit record"
                );
                None
            }
        }
    }

    async fn deny(
        &self,
        command: &AuthorizeStorageOperationCommand,
        reason: String,
    ) -> StorageGatewayDomainError {
        let mut entry = Self::entry(command, command.operation().audit_action(), false);
        entry.error_detail = Some(reason.clone());
        self.record_best_effort(entry).await;

        StorageGatewayDomainError::PermissionDenied(reason)
    }

    /// Grant store failures are audited as failures but stay distinct from a
    /// denial for the caller.
    async fn record_store_failure(
        &self,
        command: &AuthorizeStorageOperationCommand,
        error: StorageGatewayDomainError,
    ) -> StorageGatewayDomainError {
        if let StorageGatewayDomainError::GrantStoreUnavailable(detail) = &error {
            let mut entry = Self::entry(command, command.operation().audit_action(), false);
            entry.error_detail = Some(format!("grant store unavailable: {detail}"));
            self.record_best_effort(entry).await;
        }
        error
    }
}

#[async_trait]
impl StorageMediationService for StorageMediationServiceImpl {
    async fn handle_authorize(
        &self,
        command: AuthorizeStorageOperationCommand,
    ) -> Result<StorageAccessAuthorization, StorageGatewayDomainError> {
        let operation = command.operation();
        let verdict = match self
            .access_facade
            .resolve(
                command.actor(),
                command.bucket_name(),
                command.object_key(),
                operation,
            )
            .await
        {
            Ok(verdict) => verdict,
            Err(error) => return Err(self.record_store_failure(&command, error).await),
        };

        if verdict.allowed {
            let mut entry = Self::entry(&command, operation.authorized_audit_action(), true);
            entry.context_metadata = Some(json!({
                "authorized": true,
                "matched_grant_id": verdict.matched_grant_id,
                "storage_backend_id": verdict.storage_backend_id,
            }));
            let audit_record_id = self.record_best_effort(entry).await;

            tracing::debug!(
                actor_user_id = %command.actor().user_id,
                operation = %operation,
                bucket = command.bucket_name(),
                key = command.object_key(),
                "storage operation granted"
            );

            return Ok(StorageAccessAuthorization::Granted {
                matched_grant_id: verdict.matched_grant_id,
                storage_backend_id: verdict.storage_backend_id,
                reason: verdict.reason,
                audit_record_id,
            });
        }

        if operation == StorageOperation::List {
            let entries = match self
                .access_facade
                .expand(command.actor(), command.bucket_name(), command.object_key())
                .await
            {
                Ok(entries) => entries,
                Err(error) => return Err(self.record_store_failure(&command, error).await),
            };

            if !entries.is_empty() {
                let mut entry = Self::entry(&command, operation.audit_action(), true);
                entry.context_metadata = Some(json!({
                    "partial_visibility": true,
                    "synthetic_entries": entries.len(),
                }));
                let audit_record_id = self.record_best_effort(entry).await;

                return Ok(StorageAccessAuthorization::PartialListing {
                    entries,
                    audit_record_id,
                });
            }
        }

        Err(self.deny(&command, verdict.reason).await)
    }

    async fn handle_report_outcome(
        &self,
        command: ReportOperationOutcomeCommand,
    ) -> Result<OperationOutcomeReceipt, StorageGatewayDomainError> {
        let receipt = self
            .audit_facade
            .record(StorageAuditEntry {
                actor: command.actor().clone(),
                action_name: command.operation().audit_action(),
                bucket_name: command.bucket_name().to_string(),
                object_key: command.object_key().to_string(),
                succeeded: command.succeeded(),
                context_metadata: command.context_metadata().cloned(),
                error_detail: command.error_detail().map(str::to_string),
            })
            .await?;

        Ok(OperationOutcomeReceipt {
            record_id: receipt.record_id,
            recorded_at: receipt.recorded_at,
        })
    }
}
