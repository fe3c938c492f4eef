use serde::{Deserialize, Serialize};

/// Account type stored in the session's `user_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserType {
    /// Parse a session `user_type` code. Unknown codes default to Student.
    pub fn from_code_or_default(code: &str) -> Self {
        match code {
            "a" => UserType::Admin,
            "t" => UserType::Teacher,
            "s" => UserType::Student,
            _ => UserType::Student,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserType::Student => "s",
            UserType::Teacher => "t",
            UserType::Admin => "a",
        }
    }
}

/// Signed-in user as reported by the session endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    pub user_type: String,
}

impl SessionUser {
    pub fn user_type(&self) -> UserType {
        UserType::from_code_or_default(&self.user_type)
    }
}

/// Immutable view of the session handed to the access gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Whether the initial session load has finished.
    pub loaded: bool,
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn signed_out() -> Self {
        Self {
            loaded: true,
            user: None,
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            loaded: true,
            user: Some(user),
        }
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }
}
