use std::future::Future;
use thiserror::Error;

mod config;
pub mod models;
mod nominatim;
pub use config::*;
pub use nominatim::*;

use crate::shared::geo::Coordinate;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid request url: {0}")]
    InvalidUrl(String),
    #[error("Geocoder responded with status {0}")]
    Status(u16),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No match for: {0}")]
    NotFound(String),
    #[error("Malformed coordinate value: {0}")]
    Malformed(String),
}

/// A resolved place name.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub coordinate: Coordinate,
    pub display_name: String,
}

impl TryFrom<SearchHit> for Place {
    type Error = self::Error;

    fn try_from(value: SearchHit) -> Result<Self, Self::Error> {
        let latitude = parse_degrees(&value.lat)?;
        let longitude = parse_degrees(&value.lon)?;
        Ok(Self {
            coordinate: Coordinate::new(latitude, longitude),
            display_name: value.display_name,
        })
    }
}

fn parse_degrees(value: &str) -> Result<f64, self::Error> {
    value
        .trim()
        .parse()
        .map_err(|_| self::Error::Malformed(value.to_string()))
}

/// Lookup service turning place names into coordinates and back.
pub trait Geocoder {
    /// Resolves a free-text place name to the first matching place.
    fn resolve(&self, name: &str) -> impl Future<Output = Result<Place, self::Error>> + Send;

    /// Derives a human readable label for a coordinate.
    fn reverse(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<String, self::Error>> + Send;
}

/// Parses a `/search` body, keeping only the first hit.
pub fn parse_search(body: &str, query: &str) -> Result<Place, self::Error> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    hits.into_iter()
        .next()
        .ok_or_else(|| self::Error::NotFound(query.to_string()))?
        .try_into()
}

/// Parses a `/reverse` body into a `"{place}, {postcode}"` label.
pub fn parse_reverse(body: &str, coordinate: Coordinate) -> Result<String, self::Error> {
    let hit: ReverseHit = serde_json::from_str(body)?;
    hit.address
        .map(|address| address.label())
        .ok_or_else(|| self::Error::NotFound(coordinate.to_string()))
}

#[test]
fn search_takes_first_hit_test() {
    let body = r#"[
        {"lat": "18.5213738", "lon": "73.8545071", "display_name": "Pune, Maharashtra, India"},
        {"lat": "18.0", "lon": "74.0", "display_name": "Pune District"}
    ]"#;
    let place = parse_search(body, "Pune").unwrap();
    assert_eq!(place.coordinate, Coordinate::new(18.5213738, 73.8545071));
    assert_eq!(place.display_name, "Pune, Maharashtra, India");
}

#[test]
fn search_empty_is_not_found_test() {
    let err = parse_search("[]", "Atlantis").unwrap_err();
    assert!(matches!(err, Error::NotFound(name) if name == "Atlantis"));
}

#[test]
fn search_rejects_bad_numbers_test() {
    let body = r#"[{"lat": "north", "lon": "73.85", "display_name": "?"}]"#;
    assert!(matches!(
        parse_search(body, "x").unwrap_err(),
        Error::Malformed(_)
    ));
}

#[test]
fn search_rejects_non_array_test() {
    let body = r#"{"error": "rate limited"}"#;
    assert!(matches!(parse_search(body, "x").unwrap_err(), Error::Json(_)));
}

#[test]
fn reverse_builds_label_test() {
    let body = r#"{"address": {"town": "Lonavala", "state": "Maharashtra", "postcode": "410401"}}"#;
    let label = parse_reverse(body, Coordinate::new(18.75, 73.4)).unwrap();
    assert_eq!(label, "Lonavala, 410401");
}

#[test]
fn reverse_uses_fallbacks_test() {
    let label = parse_reverse(r#"{"address": {}}"#, Coordinate::default()).unwrap();
    assert_eq!(label, "Unknown Place, No Pin");

    let label = parse_reverse(
        r#"{"address": {"state": "Goa"}}"#,
        Coordinate::new(15.3, 74.1),
    )
    .unwrap();
    assert_eq!(label, "Goa, No Pin");
}

#[test]
fn reverse_without_address_is_not_found_test() {
    let err = parse_reverse(r#"{"error": "Unable to geocode"}"#, Coordinate::default());
    assert!(matches!(err.unwrap_err(), Error::NotFound(_)));
}
