pub mod expand_visible_prefixes_query;
pub mod list_access_grants_query;
pub mod resolve_access_query;
