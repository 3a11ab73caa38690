use locmap::{
    geocoding::{self, NOMINATIM_URL},
    view::{CurrentLocationLabel, ViewConfig},
};
use std::{env, str::FromStr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

pub struct ServerConfig {
    pub port: u16,
    pub nominatim_url: String,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
    pub reverse_label: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            nominatim_url: NOMINATIM_URL.into(),
            user_agent: None,
            timeout: None,
            reverse_label: false,
        }
    }
}

impl ServerConfig {
    /// Reads `LOCMAP_*` variables, keeping defaults for missing or invalid ones.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: parsed(&lookup, "LOCMAP_PORT").unwrap_or(defaults.port),
            nominatim_url: lookup("LOCMAP_NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            user_agent: lookup("LOCMAP_USER_AGENT"),
            timeout: parsed(&lookup, "LOCMAP_TIMEOUT_SECS").map(Duration::from_secs),
            reverse_label: parsed(&lookup, "LOCMAP_REVERSE_LABEL").unwrap_or(false),
        }
    }

    pub fn geocoder(&self) -> geocoding::Config {
        let defaults = geocoding::Config::default();
        geocoding::Config {
            base_url: self.nominatim_url.clone(),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout: self.timeout,
            ..defaults
        }
    }

    pub fn view(&self) -> ViewConfig {
        let mut config = ViewConfig::default();
        if self.reverse_label {
            config.current_location_label = CurrentLocationLabel::ReverseGeocode;
        }
        config
    }
}

fn parsed<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid {key}: {value}");
            None
        }
    }
}

#[cfg(test)]
fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
    let vars: std::collections::HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_test() {
    let config = config_from(&[]);
    assert_eq!(config.port, 3000);
    assert_eq!(config.nominatim_url, NOMINATIM_URL);
    assert!(config.timeout.is_none());
    assert_eq!(
        config.view().current_location_label,
        CurrentLocationLabel::default()
    );
}

#[test]
fn env_overrides_test() {
    let config = config_from(&[
        ("LOCMAP_PORT", "8080"),
        ("LOCMAP_TIMEOUT_SECS", "5"),
        ("LOCMAP_USER_AGENT", "my-app/1.0"),
        ("LOCMAP_REVERSE_LABEL", "true"),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.geocoder().user_agent, "my-app/1.0");
    assert_eq!(
        config.view().current_location_label,
        CurrentLocationLabel::ReverseGeocode
    );
}

#[test]
fn invalid_values_test() {
    let config = config_from(&[("LOCMAP_PORT", "eighty"), ("LOCMAP_TIMEOUT_SECS", "-1")]);
    assert_eq!(config.port, 3000);
    assert!(config.timeout.is_none());
}
