use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use bucket_warden::access_control::{
    domain::{
        model::{
            entities::access_grant::AccessGrant,
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::{bucket_name::BucketName, grant_id::GrantId, user_id::UserId},
        },
        services::access_grant_query_service::GrantStatistics,
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

#[derive(Default)]
struct FakeAccessGrantState {
    grants: Vec<AccessGrant>,
    save_calls: usize,
    find_calls: usize,
    unavailable: bool,
    delete_after_find: bool,
}

pub struct FakeAccessGrantRepository {
    state: Mutex<FakeAccessGrantState>,
}

impl FakeAccessGrantRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeAccessGrantState::default()),
        }
    }

    pub fn seed(&self, grants: Vec<AccessGrant>) {
        self.state.lock().expect("mutex poisoned").grants.extend(grants);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().expect("mutex poisoned").unavailable = unavailable;
    }

    /// The next `find_by_id` removes the grant it returns, as if an
    /// administrator deleted it right after the read.
    pub fn delete_after_next_find(&self) {
        self.state.lock().expect("mutex poisoned").delete_after_find = true;
    }

    pub fn save_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").save_calls
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }

    pub fn stored(&self) -> Vec<AccessGrant> {
        self.state.lock().expect("mutex poisoned").grants.clone()
    }

    fn check_available(state: &FakeAccessGrantState) -> Result<(), AccessControlDomainError> {
        if state.unavailable {
            return Err(AccessControlDomainError::GrantStoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AccessGrantRepository for FakeAccessGrantRepository {
    async fn save(&self, grant: &AccessGrant) -> Result<(), AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.save_calls += 1;
        match state.grants.iter_mut().find(|stored| stored.id() == grant.id()) {
            Some(stored) => *stored = grant.clone(),
            None => state.grants.push(grant.clone()),
        }
        Ok(())
    }

    async fn update(&self, grant: &AccessGrant) -> Result<bool, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.save_calls += 1;
        match state.grants.iter_mut().find(|stored| stored.id() == grant.id()) {
            Some(stored) => {
                *stored = grant.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_id(
        &self,
        grant_id: &GrantId,
    ) -> Result<Option<AccessGrant>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.find_calls += 1;
        let found = state.grants.iter().find(|g| g.id() == grant_id).cloned();
        if state.delete_after_find {
            state.delete_after_find = false;
            state.grants.retain(|g| g.id() != grant_id);
        }
        Ok(found)
    }

    async fn find_by_user_and_bucket(
        &self,
        user_id: &UserId,
        bucket_name: &BucketName,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.find_calls += 1;
        Ok(state
            .grants
            .iter()
            .filter(|g| g.owner_user_id() == user_id && g.bucket_name() == bucket_name)
            .cloned()
            .collect())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.find_calls += 1;
        Ok(state
            .grants
            .iter()
            .filter(|g| g.owner_user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        state.find_calls += 1;
        Ok(state.grants.clone())
    }

    async fn delete(&self, grant_id: &GrantId) -> Result<bool, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        let before = state.grants.len();
        state.grants.retain(|g| g.id() != grant_id);
        Ok(state.grants.len() < before)
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, AccessControlDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        let before = state.grants.len();
        state.grants.retain(|g| g.owner_user_id() != user_id);
        Ok((before - state.grants.len()) as u64)
    }

    async fn statistics(&self) -> Result<GrantStatistics, AccessControlDomainError> {
        let state = self.state.lock().expect("mutex poisoned");
        Self::check_available(&state)?;
        let buckets = state
            .grants
            .iter()
            .map(|g| g.bucket_name().value().to_string())
            .collect::<HashSet<_>>();
        Ok(GrantStatistics {
            total_grants: state.grants.len() as u64,
            distinct_buckets: buckets.len() as u64,
        })
    }
}
