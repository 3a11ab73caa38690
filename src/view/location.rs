use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::shared::geo::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    Destination,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Start => f.write_str("start"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub label: String,
    pub coordinate: Coordinate,
}

impl NamedLocation {
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: label.into(),
            coordinate,
        }
    }
}
