pub mod storage_actor;
pub mod visible_directory_entry;
