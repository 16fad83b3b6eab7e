use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StorageGatewayErrorResponseResource {
    pub code: String,
    pub message: String,
}
