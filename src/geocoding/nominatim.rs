use reqwest::{
    Client, Url,
    header::{ACCEPT_LANGUAGE, USER_AGENT},
};
use tracing::debug;

use super::{Config, Error, Geocoder, Place, parse_reverse, parse_search};
use crate::shared::geo::Coordinate;

/// Zoom passed to `/reverse`, roughly city level.
const REVERSE_ZOOM: &str = "10";

/// [`Geocoder`] backed by a Nominatim instance.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    base_url: String,
    user_agent: String,
    accept_language: Option<String>,
}

impl Nominatim {
    pub fn new(config: Config) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
            accept_language: config.accept_language,
        })
    }

    fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        Url::parse_with_params(&format!("{}/{endpoint}", self.base_url), params)
            .map_err(|err| Error::InvalidUrl(err.to_string()))
    }

    async fn fetch(&self, url: Url) -> Result<String, Error> {
        debug!("GET {url}");
        let mut request = self.client.get(url).header(USER_AGENT, &self.user_agent);
        if let Some(language) = &self.accept_language {
            request = request.header(ACCEPT_LANGUAGE, language);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl Geocoder for Nominatim {
    async fn resolve(&self, name: &str) -> Result<Place, Error> {
        let url = self.url("search", &[("format", "json"), ("q", name)])?;
        let body = self.fetch(url).await?;
        parse_search(&body, name)
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<String, Error> {
        let lat = coordinate.latitude.to_string();
        let lon = coordinate.longitude.to_string();
        let url = self.url(
            "reverse",
            &[
                ("format", "json"),
                ("lat", &lat),
                ("lon", &lon),
                ("zoom", REVERSE_ZOOM),
            ],
        )?;
        let body = self.fetch(url).await?;
        parse_reverse(&body, coordinate)
    }
}

#[test]
fn search_url_encoding_test() {
    let nominatim = Nominatim::new(Config {
        base_url: "https://geo.example.org/".into(),
        ..Default::default()
    })
    .unwrap();
    let url = nominatim
        .url("search", &[("format", "json"), ("q", "New Delhi")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://geo.example.org/search?format=json&q=New+Delhi"
    );
}

#[test]
fn bad_base_url_test() {
    let nominatim = Nominatim::new(Config {
        base_url: "not a url".into(),
        ..Default::default()
    })
    .unwrap();
    assert!(matches!(
        nominatim.url("search", &[]),
        Err(Error::InvalidUrl(_))
    ));
}
