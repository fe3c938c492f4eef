use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Two menu nodes share one identity.
    DuplicateIdentity,
    /// The configuration file could not be parsed.
    Config,
    /// The session endpoint failed or returned an unusable payload.
    Session,
    Unauthorized,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::DuplicateIdentity => write!(f, "DuplicateIdentity"),
            AppErrorKind::Config => write!(f, "Config"),
            AppErrorKind::Session => write!(f, "Session"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error shared by the app and its pure logic crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn duplicate_identity(identity: &str) -> Self {
        Self {
            kind: AppErrorKind::DuplicateIdentity,
            message: format!("menu identity `{identity}` is used more than once"),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
        }
    }

    pub fn session(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Session,
            message: message.into(),
        }
    }

    /// Parse an AppError out of an HTTP error body.
    ///
    /// Bodies are either the raw JSON object or a text wrapper around it,
    /// e.g. `session lookup failed: {"kind":"Unauthorized",...}`.
    pub fn from_response_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }

    /// User-facing message for an error body, with a generic fallback.
    pub fn friendly_message(body: &str) -> String {
        match Self::from_response_body(body) {
            Some(app_error) => app_error.message,
            None => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.to_string())
    }
}
