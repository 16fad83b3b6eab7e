use chrono::{DateTime, Utc};

/// Zero-size pseudo object standing for a sub-prefix the actor may list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VisibleDirectoryEntry {
    pub key: String,
    pub size: u64,
    pub etag: String,
    pub last_modified: DateTime<Utc>,
}
