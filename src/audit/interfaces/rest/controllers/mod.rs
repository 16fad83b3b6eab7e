pub mod audit_rest_controller;
