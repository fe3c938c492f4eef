use crate::{RedirectTarget, SessionSnapshot, UserType};

/// Result of checking a session against a page's role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The session has not finished loading. Do nothing yet.
    Pending,
    Redirect(RedirectTarget),
    Granted,
}

/// Role gate for a page that only one account type may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGate {
    required: UserType,
}

impl AccessGate {
    pub fn new(required: UserType) -> Self {
        Self { required }
    }

    pub fn admin() -> Self {
        Self::new(UserType::Admin)
    }

    pub fn required(&self) -> UserType {
        self.required
    }

    pub fn evaluate(&self, session: &SessionSnapshot) -> GateDecision {
        if !session.loaded {
            return GateDecision::Pending;
        }
        match &session.user {
            None => GateDecision::Redirect(RedirectTarget::Login),
            Some(user) if user.user_type() != self.required => {
                GateDecision::Redirect(RedirectTarget::Dashboard)
            }
            Some(_) => GateDecision::Granted,
        }
    }
}
