/// Production host for every YOLP endpoint.
pub const DEFAULT_BASE_URL: &str = "https://map.yahooapis.jp";

/// `User-Agent` sent when the caller does not override it.
pub const DEFAULT_USER_AGENT: &str = "yolp-client/0.1";

#[derive(Clone, PartialEq, Eq)]
pub struct YolpSettings {
    /// Application identifier issued by the Yahoo! JAPAN developer network.
    pub app_id: String,
    pub base_url: String,
    pub user_agent: String,
}

impl YolpSettings {
    /// Settings for the production host with the default user agent.
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl std::fmt::Debug for YolpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YolpSettings")
            .field("app_id", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_production_defaults() {
        let settings = YolpSettings::new("my-app");
        assert_eq!(settings.app_id, "my-app");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn debug_output_redacts_app_id() {
        let rendered = format!("{:?}", YolpSettings::new("secret-app-id"));
        assert!(!rendered.contains("secret-app-id"), "leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
