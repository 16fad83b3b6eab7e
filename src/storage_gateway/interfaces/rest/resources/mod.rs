pub mod operation_outcome_resource;
pub mod storage_authorization_resource;
pub mod storage_gateway_error_response_resource;
