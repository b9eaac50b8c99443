//! Settings shared between the server render and the hydrated client
//!
//! The server serializes these into the page shell; the client reads them
//! back before mounting so both sides animate with the same timings.

use serde::{Deserialize, Serialize};

use super::motion::MotionTimings;

/// Canonical origin used when no site URL is configured
pub const DEFAULT_SITE_URL: &str = "https://mooj-tech.com";

/// `id` of the `<script type="application/json">` carrying the settings
pub const SETTINGS_ELEMENT_ID: &str = "site-settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_url: String,
    #[serde(default)]
    pub timings: MotionTimings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            timings: MotionTimings::default(),
        }
    }
}

impl SiteSettings {
    /// Absolute URL of a site path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }

    /// schema.org `Organization` block for the home page
    pub fn organization_json_ld(&self) -> String {
        serde_json::json!({
            "@context": "https://schema.org",
            "@type": "Organization",
            "name": "Mooj-Tech",
            "url": self.site_url,
            "logo": self.absolute_url("icons/bot.svg"),
            "description": "AI-powered supply chain risk prediction and logistics intelligence.",
        })
        .to_string()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_timings() {
        let mut settings = SiteSettings::default();
        settings.timings.submit_delay_ms = 250;

        let json = settings.to_json().unwrap();
        let parsed = SiteSettings::from_json(&json).unwrap();
        assert_eq!(parsed.timings.submit_delay_ms, 250);
        assert_eq!(parsed.site_url, DEFAULT_SITE_URL);
    }

    #[test]
    fn test_missing_timings_fall_back_to_defaults() {
        let parsed = SiteSettings::from_json(r#"{"site_url":"https://example.test"}"#).unwrap();
        assert_eq!(parsed.timings, MotionTimings::default());
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(SiteSettings::from_json("<html>").is_err());
    }

    #[test]
    fn test_organization_json_ld_uses_site_url() {
        let settings = SiteSettings {
            site_url: "https://staging.mooj-tech.com".to_string(),
            ..SiteSettings::default()
        };
        let value: serde_json::Value =
            serde_json::from_str(&settings.organization_json_ld()).unwrap();
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["url"], "https://staging.mooj-tech.com");
        assert_eq!(value["logo"], "https://staging.mooj-tech.com/icons/bot.svg");
    }

    #[test]
    fn test_absolute_url() {
        let settings = SiteSettings::default();
        assert_eq!(settings.absolute_url("/about"), "https://mooj-tech.com/about");
        assert_eq!(settings.absolute_url("og-image.png"), "https://mooj-tech.com/og-image.png");
    }
}
