use std::time::Duration;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

pub struct Config {
    pub base_url: String,
    /// Nominatim rejects requests without an identifying user agent.
    pub user_agent: String,
    pub accept_language: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: NOMINATIM_URL.into(),
            user_agent: concat!("locmap/", env!("CARGO_PKG_VERSION")).into(),
            accept_language: None,
            timeout: None,
        }
    }
}
