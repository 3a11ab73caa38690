use super::{NamedLocation, scene::TileLayer};
use crate::shared::geo::Coordinate;

pub const CURRENT_LOCATION: &str = "Current Location";

/// How the start label is filled after the device location is used.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentLocationLabel {
    Placeholder(String),
    ReverseGeocode,
}

impl Default for CurrentLocationLabel {
    fn default() -> Self {
        Self::Placeholder(CURRENT_LOCATION.into())
    }
}

#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub start: NamedLocation,
    pub destination: NamedLocation,
    pub current_location_label: CurrentLocationLabel,
    /// Replace typed labels with the geocoder's display name after a search.
    pub label_from_search: bool,
    pub map: MapStyle,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            start: NamedLocation::new("Mumbai", Coordinate::new(19.076, 72.8777)),
            destination: NamedLocation::new("Pune", Coordinate::new(18.5204, 73.8567)),
            current_location_label: Default::default(),
            label_from_search: false,
            map: Default::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapStyle {
    pub zoom: u8,
    pub tiles: TileLayer,
    pub line_color: String,
    pub line_weight: u32,
    pub line_opacity: f32,
    /// Degrees of latitude between a marker and its name label.
    pub label_offset: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            zoom: 6,
            tiles: TileLayer {
                url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".into(),
                attribution: "&copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> contributors"
                    .into(),
            },
            line_color: "red".into(),
            line_weight: 6,
            line_opacity: 0.8,
            label_offset: 0.2,
        }
    }
}
