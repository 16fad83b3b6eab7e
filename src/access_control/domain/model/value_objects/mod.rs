pub mod access_subject;
pub mod bucket_name;
pub mod grant_id;
pub mod object_prefix;
pub mod storage_backend_id;
pub mod user_id;
