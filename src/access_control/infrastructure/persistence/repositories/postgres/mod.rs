pub mod sqlx_access_grant_repository_impl;
