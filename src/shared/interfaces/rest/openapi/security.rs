use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

use crate::shared::interfaces::rest::request_actor::{ACTOR_ADMIN_HEADER, ACTOR_ID_HEADER};

pub struct ActorHeadersSecurityAddon;

impl Modify for ActorHeadersSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "actorId",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACTOR_ID_HEADER))),
            );
            components.add_security_scheme(
                "actorAdmin",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACTOR_ADMIN_HEADER))),
            );
        }
    }
}
