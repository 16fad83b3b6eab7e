pub mod authorize_storage_operation_command;
pub mod report_operation_outcome_command;
