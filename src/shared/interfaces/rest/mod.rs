pub mod openapi;
pub mod request_actor;
