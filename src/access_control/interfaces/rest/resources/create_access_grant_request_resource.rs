use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateAccessGrantRequestResource {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 3, max = 63))]
    pub bucket_name: String,
    pub prefix: Option<String>,
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
    pub can_list: Option<bool>,
    pub storage_backend_id: Option<String>,
    #[validate(length(max = 1024))]
    pub description: Option<String>,
}
