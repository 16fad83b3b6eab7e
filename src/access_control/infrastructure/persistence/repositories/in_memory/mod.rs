pub mod in_memory_access_grant_repository_impl;
