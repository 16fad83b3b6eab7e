use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;

use crate::access_control::{
    domain::{
        model::{
            entities::access_grant::AccessGrant,
            enums::{
                access_control_domain_error::AccessControlDomainError,
                grant_selection_policy::GrantSelectionPolicy, storage_action::StorageAction,
            },
            queries::{
                expand_visible_prefixes_query::ExpandVisiblePrefixesQuery,
                resolve_access_query::ResolveAccessQuery,
            },
            value_objects::object_prefix::ObjectPrefix,
        },
        services::permission_resolution_service::{
            AccessDecision, DIRECTORY_ETAG, PermissionResolutionService, SyntheticDirectoryEntry,
        },
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

pub struct PermissionResolutionServiceImpl {
    access_grant_repository: Arc<dyn AccessGrantRepository>,
    selection_policy: GrantSelectionPolicy,
}

impl PermissionResolutionServiceImpl {
    pub fn new(access_grant_repository: Arc<dyn AccessGrantRepository>) -> Self {
        Self::new_with_policy(access_grant_repository, GrantSelectionPolicy::default())
    }

    pub fn new_with_policy(
        access_grant_repository: Arc<dyn AccessGrantRepository>,
        selection_policy: GrantSelectionPolicy,
    ) -> Self {
        Self {
            access_grant_repository,
            selection_policy,
        }
    }

    fn select_grant<'a>(
        grants: &'a [AccessGrant],
        object_key: &str,
        action: StorageAction,
        policy: GrantSelectionPolicy,
    ) -> Option<&'a AccessGrant> {
        let mut candidates = grants
            .iter()
            .filter(|grant| grant.authorizes(object_key, action));

        match policy {
            GrantSelectionPolicy::FirstMatch => candidates.next(),
            GrantSelectionPolicy::LongestPrefix => {
                candidates.fold(None, |best: Option<&AccessGrant>, grant| match best {
                    Some(current) if current.prefix().len() >= grant.prefix().len() => {
                        Some(current)
                    }
                    _ => Some(grant),
                })
            }
        }
    }

    fn visible_segments(grants: &[AccessGrant], requested_prefix: &ObjectPrefix) -> BTreeSet<String> {
        grants
            .iter()
            .filter(|grant| grant.rights().can_list)
            .filter_map(|grant| grant.prefix().first_segment_below(requested_prefix))
            .collect()
    }
}

#[async_trait]
impl PermissionResolutionService for PermissionResolutionServiceImpl {
    async fn handle_resolve(
        &self,
        query: ResolveAccessQuery,
    ) -> Result<AccessDecision, AccessControlDomainError> {
        let subject = query.subject();
        if subject.is_administrator() {
            return Ok(AccessDecision::allow(
                None,
                "administrator access".to_string(),
            ));
        }

        let grants = self
            .access_grant_repository
            .find_by_user_and_bucket(subject.user_id(), query.bucket_name())
            .await?;

        if grants.is_empty() {
            tracing::debug!(
                user_id = %subject.user_id(),
                bucket = %query.bucket_name(),
                "no grants on bucket"
            );
            return Ok(AccessDecision::deny(format!(
                "no bucket access for {}",
                query.bucket_name()
            )));
        }

        let decision = match Self::select_grant(
            &grants,
            query.object_key(),
            query.action(),
            self.selection_policy,
        ) {
            Some(grant) => AccessDecision::allow(
                Some(grant.clone()),
                format!("granted by prefix \"{}\"", grant.prefix().value()),
            ),
            None => AccessDecision::deny(format!(
                "no {} permission for {}/{}",
                query.action(),
                query.bucket_name(),
                query.object_key()
            )),
        };

        tracing::debug!(
            user_id = %subject.user_id(),
            bucket = %query.bucket_name(),
            key = query.object_key(),
            action = %query.action(),
            allowed = decision.allowed,
            "access resolved"
        );

        Ok(decision)
    }

    async fn handle_expand(
        &self,
        query: ExpandVisiblePrefixesQuery,
    ) -> Result<Vec<SyntheticDirectoryEntry>, AccessControlDomainError> {
        let grants = self
            .access_grant_repository
            .find_by_user_and_bucket(query.subject().user_id(), query.bucket_name())
            .await?;

        let requested_prefix = query.requested_prefix();
        let last_modified = Utc::now();

        Ok(Self::visible_segments(&grants, requested_prefix)
            .into_iter()
            .map(|segment| SyntheticDirectoryEntry {
                key: format!("{}{}", requested_prefix.value(), segment),
                size: 0,
                etag: DIRECTORY_ETAG.to_string(),
                last_modified,
            })
            .collect())
    }
}
