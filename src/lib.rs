pub mod access_control;
pub mod audit;
pub mod config;
pub mod shared;
pub mod storage_gateway;
