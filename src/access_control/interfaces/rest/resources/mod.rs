pub mod access_control_error_response_resource;
pub mod access_grant_resource;
pub mod create_access_grant_request_resource;
pub mod resolve_access_request_resource;
pub mod update_access_grant_request_resource;
