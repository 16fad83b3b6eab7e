pub mod access_grant_repository;
pub mod in_memory;
pub mod postgres;
