use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ReportOperationOutcomeRequestResource {
    #[validate(length(min = 1))]
    pub operation: String,
    #[validate(length(min = 1, max = 255))]
    pub bucket_name: String,
    #[serde(default)]
    pub object_key: String,
    pub succeeded: bool,
    #[validate(length(max = 4096))]
    pub error_detail: Option<String>,
    /// Free-form details such as object size or content type.
    #[schema(value_type = Option<Object>)]
    pub context_metadata: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct OperationOutcomeReceiptResource {
    pub record_id: Uuid,
    pub recorded_at: DateTime<Utc>,
}
