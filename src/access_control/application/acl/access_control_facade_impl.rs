use std::sync::Arc;

use async_trait::async_trait;

use crate::access_control::{
    domain::{
        model::{
            enums::access_control_domain_error::AccessControlDomainError,
            queries::{
                expand_visible_prefixes_query::ExpandVisiblePrefixesQuery,
                resolve_access_query::{ResolveAccessQuery, ResolveAccessQueryParts},
            },
            value_objects::{access_subject::AccessSubject, user_id::UserId},
        },
        services::permission_resolution_service::PermissionResolutionService,
    },
    interfaces::acl::access_control_facade::{
        AccessControlFacade, AccessControlPermissionDecision, AccessControlPermissionRequest,
        AccessControlSubject, AccessControlVisibleEntry,
    },
};

pub struct AccessControlFacadeImpl {
    resolution_service: Arc<dyn PermissionResolutionService>,
}

impl AccessControlFacadeImpl {
    pub fn new(resolution_service: Arc<dyn PermissionResolutionService>) -> Self {
        Self { resolution_service }
    }

    fn to_access_subject(subject: &AccessControlSubject) -> AccessSubject {
        AccessSubject::new(UserId::from_uuid(subject.user_id), subject.is_administrator)
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn check_permission(
        &self,
        request: AccessControlPermissionRequest,
    ) -> Result<AccessControlPermissionDecision, AccessControlDomainError> {
        let query = ResolveAccessQuery::new(ResolveAccessQueryParts {
            subject: Self::to_access_subject(&request.subject),
            bucket_name: request.bucket_name,
            object_key: request.object_key,
            action_name: request.action_name,
        })?;

        let decision = self.resolution_service.handle_resolve(query).await?;

        Ok(AccessControlPermissionDecision {
            allowed: decision.allowed,
            reason: decision.reason,
            matched_grant_id: decision.matched_grant.as_ref().map(|g| g.id().value()),
            storage_backend_id: decision
                .matched_grant
                .as_ref()
                .and_then(|g| g.storage_backend_id().map(|id| id.value())),
        })
    }

    async fn expand_visible_prefixes(
        &self,
        subject: AccessControlSubject,
        bucket_name: String,
        requested_prefix: String,
    ) -> Result<Vec<AccessControlVisibleEntry>, AccessControlDomainError> {
        let query = ExpandVisiblePrefixesQuery::new(
            Self::to_access_subject(&subject),
            bucket_name,
            requested_prefix,
        )?;

        let entries = self.resolution_service.handle_expand(query).await?;

        Ok(entries
            .into_iter()
            .map(|entry| AccessControlVisibleEntry {
                key: entry.key,
                size: entry.size,
                etag: entry.etag,
                last_modified: entry.last_modified,
            })
            .collect())
    }
}
