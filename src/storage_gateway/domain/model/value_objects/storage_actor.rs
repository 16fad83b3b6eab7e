use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StorageActor {
    pub user_id: Uuid,
    pub is_administrator: bool,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
}
