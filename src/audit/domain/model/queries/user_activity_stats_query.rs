use uuid::Uuid;

use crate::audit::domain::model::{
    enums::audit_domain_error::AuditDomainError,
    value_objects::{activity_window::ActivityWindow, audit_requester::AuditRequester},
};

#[derive(Clone, Debug)]
pub struct UserActivityStatsQuery {
    requested_by: AuditRequester,
    user_id: Uuid,
    window: ActivityWindow,
}

impl UserActivityStatsQuery {
    pub fn new(
        requested_by: AuditRequester,
        user_id: String,
        days: Option<u32>,
    ) -> Result<Self, AuditDomainError> {
        let user_id =
            Uuid::parse_str(user_id.trim()).map_err(|_| AuditDomainError::InvalidActorId)?;

        Ok(Self {
            requested_by,
            user_id,
            window: ActivityWindow::new(days)?,
        })
    }

    pub fn requested_by(&self) -> &AuditRequester {
        &self.requested_by
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn window(&self) -> ActivityWindow {
        self.window
    }
}
