use serde::{Deserialize, Serialize};

use crate::AppError;

fn default_school_name() -> String {
    "School".to_string()
}

fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Public site settings shown in the UI.
///
/// Every field has a default so that a missing or partial `[site]` table
/// still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_school_name")]
    pub school_name: String,
    /// Origin of the backend that serves `/api/session`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            school_name: default_school_name(),
            api_base_url: default_api_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }

    /// Document title for a page, suffixed with the school name.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.site.school_name)
    }
}
