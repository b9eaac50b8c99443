//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::{DEFAULT_SITE_URL, MotionTimings, SiteSettings};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin of the site, used for canonical and Open Graph URLs
    /// Example: https://mooj-tech.com
    pub site_url: String,

    /// Endpoint of a real contact-form backend, once there is one
    /// Example: https://api.mooj-tech.com/contact
    pub contact_endpoint: Option<String>,

    /// Artificial latency of the mock contact submission, in milliseconds
    pub submit_delay_ms: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("SITE_URL").ok(),
            std::env::var("CONTACT_ENDPOINT").ok(),
            std::env::var("SUBMIT_DELAY_MS").ok(),
        )
    }

    fn from_values(
        site_url: Option<String>,
        contact_endpoint: Option<String>,
        submit_delay_ms: Option<String>,
    ) -> Self {
        let defaults = MotionTimings::default();
        Self {
            site_url: site_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
            contact_endpoint: contact_endpoint.filter(|url| !url.is_empty()),
            submit_delay_ms: submit_delay_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.submit_delay_ms),
        }
    }

    /// Check if a real contact backend is configured
    pub fn has_contact_endpoint(&self) -> bool {
        self.contact_endpoint.is_some()
    }

    /// Settings handed to the rendered app and embedded for the client
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            site_url: self.site_url.clone(),
            timings: MotionTimings {
                submit_delay_ms: self.submit_delay_ms,
                ..MotionTimings::default()
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_values(
            Some("https://staging.mooj-tech.com/".to_string()),
            Some("https://api.mooj-tech.com/contact".to_string()),
            Some("500".to_string()),
        );

        assert_eq!(config.site_url, "https://staging.mooj-tech.com");
        assert_eq!(
            config.contact_endpoint,
            Some("https://api.mooj-tech.com/contact".to_string())
        );
        assert_eq!(config.submit_delay_ms, 500);
        assert!(config.has_contact_endpoint());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_values(None, None, None);

        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.contact_endpoint.is_none());
        assert_eq!(config.submit_delay_ms, 2000);
    }

    #[test]
    fn test_config_ignores_empty_and_malformed_values() {
        let config = Config::from_values(
            Some(String::new()),
            Some(String::new()),
            Some("soon".to_string()),
        );

        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(!config.has_contact_endpoint());
        assert_eq!(config.submit_delay_ms, 2000);
    }

    #[test]
    fn test_site_settings_carry_config() {
        let config = Config::from_values(
            Some("https://preview.mooj-tech.com".to_string()),
            None,
            Some("10".to_string()),
        );
        let settings = config.site_settings();

        assert_eq!(settings.site_url, "https://preview.mooj-tech.com");
        assert_eq!(settings.timings.submit_delay_ms, 10);
        assert_eq!(settings.timings.page_ms, 500.0);
    }
}
