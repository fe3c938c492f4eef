use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, bundled at build time so the
/// client has its site settings without a round trip.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the bundled config once. A malformed file falls back to defaults.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_or_default(BUNDLED_CONFIG))
}

fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(school = %config.site.school_name, "site config loaded");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "config.toml unusable, using defaults");
            AppConfig::default()
        }
    }
}
