use locmap::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewDto {
    pub start: NamedLocation,
    pub destination: NamedLocation,
    pub distance_km: Option<f64>,
    pub distance: Option<String>,
}

impl ViewDto {
    pub fn from(view: &LocationView) -> Self {
        Self {
            start: view.start().clone(),
            destination: view.destination().clone(),
            distance_km: view.distance().map(|distance| distance.rounded_kilometers()),
            distance: view.distance_text(),
        }
    }
}
