use crate::access_control::domain::model::value_objects::user_id::UserId;

/// The actor a request is evaluated for. Authentication happens upstream; this
/// only carries the resolved identity and the administrator flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccessSubject {
    user_id: UserId,
    is_administrator: bool,
}

impl AccessSubject {
    pub fn new(user_id: UserId, is_administrator: bool) -> Self {
        Self {
            user_id,
            is_administrator,
        }
    }

    pub fn administrator(user_id: UserId) -> Self {
        Self::new(user_id, true)
    }

    pub fn member(user_id: UserId) -> Self {
        Self::new(user_id, false)
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_administrator(&self) -> bool {
        self.is_administrator
    }
}
