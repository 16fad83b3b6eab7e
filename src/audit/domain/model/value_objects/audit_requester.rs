use uuid::Uuid;

/// Identity of whoever reads the ledger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AuditRequester {
    user_id: Uuid,
    is_administrator: bool,
}

impl AuditRequester {
    pub fn new(user_id: Uuid, is_administrator: bool) -> Self {
        Self {
            user_id,
            is_administrator,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn is_administrator(&self) -> bool {
        self.is_administrator
    }
}
