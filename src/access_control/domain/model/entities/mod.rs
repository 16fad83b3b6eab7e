pub mod access_grant;
