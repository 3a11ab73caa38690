use futures_util::future;
use serde::Serialize;
use tracing::{debug, warn};

mod config;
mod current;
mod location;
pub mod scene;
pub use config::*;
pub use current::*;
pub use location::*;

use crate::{
    device::DeviceLocator,
    geocoding::{self, Geocoder, Place},
    shared::geo::{Coordinate, Distance},
};
use scene::*;

/// What a lookup did to one side of the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    Updated { coordinate: Coordinate },
    Unchanged { reason: String },
}

impl Resolution {
    pub fn is_updated(&self) -> bool {
        matches!(self, Resolution::Updated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub start: Resolution,
    pub destination: Resolution,
}

/// Two named locations and the great-circle distance between them.
///
/// Every write to a coordinate recomputes the distance before returning, so
/// a present distance always matches the current pair.
#[derive(Debug, Clone)]
pub struct LocationView {
    start: NamedLocation,
    destination: NamedLocation,
    distance: Option<Distance>,
    config: ViewConfig,
}

impl Default for LocationView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl LocationView {
    pub fn new(config: ViewConfig) -> Self {
        let mut view = Self::blank(config);
        view.recompute();
        view
    }

    /// A view whose distance has not been computed yet.
    pub fn blank(config: ViewConfig) -> Self {
        Self {
            start: config.start.clone(),
            destination: config.destination.clone(),
            distance: None,
            config,
        }
    }

    pub fn start(&self) -> &NamedLocation {
        &self.start
    }

    pub fn destination(&self) -> &NamedLocation {
        &self.destination
    }

    pub fn location(&self, side: Side) -> &NamedLocation {
        match side {
            Side::Start => &self.start,
            Side::Destination => &self.destination,
        }
    }

    fn location_mut(&mut self, side: Side) -> &mut NamedLocation {
        match side {
            Side::Start => &mut self.start,
            Side::Destination => &mut self.destination,
        }
    }

    pub fn label(&self, side: Side) -> &str {
        &self.location(side).label
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn distance_text(&self) -> Option<String> {
        self.distance.map(|distance| format!("Distance: {distance} km"))
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Edits the text of one side. Coordinates and distance are untouched.
    pub fn set_label(&mut self, side: Side, label: impl Into<String>) {
        self.location_mut(side).label = label.into();
    }

    pub fn set_coordinate(&mut self, side: Side, coordinate: Coordinate) {
        self.location_mut(side).coordinate = coordinate;
        self.recompute();
    }

    pub fn apply_place(&mut self, side: Side, place: Place) {
        if self.config.label_from_search && !place.display_name.is_empty() {
            self.location_mut(side).label = place.display_name;
        }
        self.set_coordinate(side, place.coordinate);
    }

    /// Applies a lookup outcome to one side; failures leave the side as it was.
    pub fn apply_resolution(
        &mut self,
        side: Side,
        outcome: Result<Place, geocoding::Error>,
    ) -> Resolution {
        match outcome {
            Ok(place) => {
                let coordinate = place.coordinate;
                debug!("Resolved {side} to {coordinate}");
                self.apply_place(side, place);
                Resolution::Updated { coordinate }
            }
            Err(err) => {
                warn!("Error fetching {side} location: {err}");
                Resolution::Unchanged {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Resolves both labels concurrently and applies each side on its own.
    pub async fn search<G: Geocoder>(&mut self, geocoder: &G) -> SearchReport {
        let (start, destination) = future::join(
            geocoder.resolve(&self.start.label),
            geocoder.resolve(&self.destination.label),
        )
        .await;
        SearchReport {
            start: self.apply_resolution(Side::Start, start),
            destination: self.apply_resolution(Side::Destination, destination),
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.start, &mut self.destination);
        self.recompute();
    }

    pub fn apply_device_location(&mut self, location: NamedLocation) {
        self.start.label = location.label;
        self.set_coordinate(Side::Start, location.coordinate);
    }

    /// Moves the start to the device position. On failure nothing changes
    /// and the alert for the user is returned.
    pub async fn use_device_location<L, G>(
        &mut self,
        locator: &L,
        geocoder: &G,
    ) -> Result<(), Alert>
    where
        L: DeviceLocator,
        G: Geocoder,
    {
        let location = locate(locator, geocoder, &self.config.current_location_label).await?;
        self.apply_device_location(location);
        Ok(())
    }

    pub fn scene(&self) -> MapScene {
        let style = &self.config.map;
        let (start, destination) = (&self.start, &self.destination);
        MapScene {
            center: start.coordinate,
            zoom: style.zoom,
            tiles: style.tiles.clone(),
            markers: [start, destination].map(|location| Marker {
                position: location.coordinate,
                popup: location.label.clone(),
            }),
            labels: [start, destination].map(|location| LabelPin {
                position: location.coordinate.offset_north(style.label_offset),
                text: location.label.clone(),
            }),
            route: Polyline {
                points: [start.coordinate, destination.coordinate],
                color: style.line_color.clone(),
                weight: style.line_weight,
                opacity: style.line_opacity,
            },
            distance: self.distance_text(),
        }
    }

    fn recompute(&mut self) {
        let distance = self.start.coordinate.distance(&self.destination.coordinate);
        self.distance = Some(distance.rounded());
    }
}
