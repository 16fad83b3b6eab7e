pub mod access_grant_command_service_impl;
