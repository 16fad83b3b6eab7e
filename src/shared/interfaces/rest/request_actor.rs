use axum::http::HeaderMap;
use thiserror::Error;
use uuid::Uuid;

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ADMIN_HEADER: &str = "x-actor-admin";

/// Caller identity as forwarded by the authenticating proxy in front of the
/// service, plus the request context recorded in the audit trail.
#[derive(Clone, Debug)]
pub struct RequestActor {
    pub user_id: Uuid,
    pub is_administrator: bool,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Error)]
pub enum RequestActorError {
    #[error("actor identity header is missing")]
    MissingActor,

    #[error("actor identity header is invalid")]
    InvalidActor,
}

impl RequestActor {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, RequestActorError> {
        let user_id = header_value(headers, ACTOR_ID_HEADER)
            .ok_or(RequestActorError::MissingActor)
            .and_then(|raw| Uuid::parse_str(raw).map_err(|_| RequestActorError::InvalidActor))?;

        let is_administrator = match header_value(headers, ACTOR_ADMIN_HEADER) {
            None => false,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(RequestActorError::InvalidActor),
            },
        };

        let source_address = header_value(headers, "x-forwarded-for")
            .and_then(|raw| raw.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| header_value(headers, "x-real-ip"))
            .map(str::to_string);

        Ok(Self {
            user_id,
            is_administrator,
            source_address,
            user_agent: header_value(headers, "user-agent").map(str::to_string),
        })
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
