use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Coordinate,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPin {
    pub position: Coordinate,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: [Coordinate; 2],
    pub color: String,
    pub weight: u32,
    pub opacity: f32,
}

/// Everything a map surface needs to paint the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayer,
    pub markers: [Marker; 2],
    pub labels: [LabelPin; 2],
    pub route: Polyline,
    /// `None` until a distance has been computed.
    pub distance: Option<String>,
}
