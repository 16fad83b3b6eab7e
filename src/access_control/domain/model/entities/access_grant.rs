use chrono::{DateTime, Utc};

use crate::access_control::domain::model::{
    enums::storage_action::StorageAction,
    value_objects::{
        bucket_name::BucketName, grant_id::GrantId, object_prefix::ObjectPrefix,
        storage_backend_id::StorageBackendId, user_id::UserId,
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccessGrantRights {
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
    pub can_list: bool,
}

impl AccessGrantRights {
    pub fn permits(&self, action: StorageAction) -> bool {
        match action {
            StorageAction::Read => self.can_read,
            StorageAction::Write => self.can_write,
            StorageAction::Delete => self.can_delete,
            StorageAction::List => self.can_list,
        }
    }
}

impl Default for AccessGrantRights {
    fn default() -> Self {
        Self {
            can_read: true,
            can_write: false,
            can_delete: false,
            can_list: true,
        }
    }
}

/// Field-by-field update of a grant. `None` leaves a field untouched; the
/// backend binding and the description distinguish "keep" (`None`) from
/// "clear" (`Some(None)`).
#[derive(Clone, Debug, Default)]
pub struct AccessGrantPatch {
    pub bucket_name: Option<BucketName>,
    pub prefix: Option<ObjectPrefix>,
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
    pub can_list: Option<bool>,
    pub description: Option<Option<String>>,
    pub storage_backend_id: Option<Option<StorageBackendId>>,
}

impl AccessGrantPatch {
    pub fn is_empty(&self) -> bool {
        self.bucket_name.is_none()
            && self.prefix.is_none()
            && self.can_read.is_none()
            && self.can_write.is_none()
            && self.can_delete.is_none()
            && self.can_list.is_none()
            && self.description.is_none()
            && self.storage_backend_id.is_none()
    }
}

pub struct AccessGrantRestoreParts {
    pub id: GrantId,
    pub owner_user_id: UserId,
    pub bucket_name: BucketName,
    pub prefix: ObjectPrefix,
    pub rights: AccessGrantRights,
    pub storage_backend_id: Option<StorageBackendId>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub struct AccessGrant {
    id: GrantId,
    owner_user_id: UserId,
    bucket_name: BucketName,
    prefix: ObjectPrefix,
    rights: AccessGrantRights,
    storage_backend_id: Option<StorageBackendId>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl AccessGrant {
    pub fn issue(
        owner_user_id: UserId,
        bucket_name: BucketName,
        prefix: ObjectPrefix,
        rights: AccessGrantRights,
        storage_backend_id: Option<StorageBackendId>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: GrantId::new_random(),
            owner_user_id,
            bucket_name,
            prefix,
            rights,
            storage_backend_id,
            description,
            created_at,
            updated_at: None,
        }
    }

    pub fn restore(parts: AccessGrantRestoreParts) -> Self {
        Self {
            id: parts.id,
            owner_user_id: parts.owner_user_id,
            bucket_name: parts.bucket_name,
            prefix: parts.prefix,
            rights: parts.rights,
            storage_backend_id: parts.storage_backend_id,
            description: parts.description,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        }
    }

    pub fn apply_patch(&mut self, patch: AccessGrantPatch, updated_at: DateTime<Utc>) {
        if let Some(bucket_name) = patch.bucket_name {
            self.bucket_name = bucket_name;
        }
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
        if let Some(can_read) = patch.can_read {
            self.rights.can_read = can_read;
        }
        if let Some(can_write) = patch.can_write {
            self.rights.can_write = can_write;
        }
        if let Some(can_delete) = patch.can_delete {
            self.rights.can_delete = can_delete;
        }
        if let Some(can_list) = patch.can_list {
            self.rights.can_list = can_list;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(storage_backend_id) = patch.storage_backend_id {
            self.storage_backend_id = storage_backend_id;
        }
        self.updated_at = Some(updated_at);
    }

    /// True when the grant's prefix covers `object_key` and its flag for
    /// `action` is set.
    pub fn authorizes(&self, object_key: &str, action: StorageAction) -> bool {
        self.prefix.covers(object_key) && self.rights.permits(action)
    }

    pub fn id(&self) -> &GrantId {
        &self.id
    }
    pub fn owner_user_id(&self) -> &UserId {
        &self.owner_user_id
    }
    pub fn bucket_name(&self) -> &BucketName {
        &self.bucket_name
    }
    pub fn prefix(&self) -> &ObjectPrefix {
        &self.prefix
    }
    pub fn rights(&self) -> AccessGrantRights {
        self.rights
    }
    pub fn storage_backend_id(&self) -> Option<&StorageBackendId> {
        self.storage_backend_id.as_ref()
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
