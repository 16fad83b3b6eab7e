pub mod storage_gateway_domain_error;
pub mod storage_operation;
