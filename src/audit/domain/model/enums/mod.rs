pub mod audit_action;
pub mod audit_domain_error;
pub mod audit_outcome;
