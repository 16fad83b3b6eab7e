pub mod access_control_domain_error;
pub mod grant_selection_policy;
pub mod storage_action;
