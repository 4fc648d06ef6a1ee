//! Deployment-time configuration

use std::sync::OnceLock;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Initialize the backend base URL. Call this at startup.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Get the configured backend base URL
pub fn api_base() -> &'static str {
    API_BASE.get().map(|s| s.as_str()).unwrap_or("/api")
}

/// Timer durations and gating flags for the auth session.
///
/// These replace the constants that used to be hardcoded per page variant;
/// every consumer reads the same object from context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthConfig {
    /// Full validity window of a generated code, in seconds
    pub lockdown_secs: u32,
    /// Cooldown before the restart/regenerate control unlocks, in seconds
    pub resend_secs: u32,
    /// When true, a missing/invalid ticket blocks the form entirely
    /// instead of only showing a warning
    pub require_valid_ticket: bool,
    /// Answer generate/verify from the compiled-in mock backend
    pub use_mock_api: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            lockdown_secs: 300,
            resend_secs: 60,
            require_valid_ticket: false,
            use_mock_api: false,
        }
    }
}

impl AuthConfig {
    /// Load configuration, applying `AUTHGATE_*` environment overrides
    /// where present. In the browser there is no environment, so the
    /// defaults (or whatever the server baked in) apply.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(secs) = env_u32("AUTHGATE_LOCKDOWN_SECS") {
            config.lockdown_secs = secs;
        }
        if let Some(secs) = env_u32("AUTHGATE_RESEND_SECS") {
            config.resend_secs = secs;
        }
        if let Some(flag) = env_bool("AUTHGATE_REQUIRE_VALID_TICKET") {
            config.require_valid_ticket = flag;
        }
        if let Some(flag) = env_bool("AUTHGATE_USE_MOCK_API") {
            config.use_mock_api = flag;
        }
        config
    }
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok()?.parse().ok()
}

fn env_bool(name: &str) -> Option<bool> {
    std::env::var(name).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.lockdown_secs, 300);
        assert_eq!(config.resend_secs, 60);
        assert!(!config.require_valid_ticket);
        assert!(!config.use_mock_api);
    }
}
