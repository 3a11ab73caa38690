use serde::Serialize;
use std::fmt::Display;
use tracing::{error, warn};

use super::{CURRENT_LOCATION, CurrentLocationLabel, NamedLocation};
use crate::{
    device::{self, DeviceLocator, PositionOptions},
    geocoding::Geocoder,
};

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by your browser.";

/// Blocking notification shown to the user when the device location fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub message: String,
}

impl Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<device::Error> for Alert {
    fn from(value: device::Error) -> Self {
        let message = match value {
            device::Error::Unsupported => UNSUPPORTED_MESSAGE.to_string(),
            err => format!("Unable to retrieve your location: {err}"),
        };
        Self { message }
    }
}

/// Asks the device for its position and labels it.
///
/// A failed reverse lookup still yields the position, labelled with the
/// placeholder text.
pub async fn locate<L, G>(
    locator: &L,
    geocoder: &G,
    labelling: &CurrentLocationLabel,
) -> Result<NamedLocation, Alert>
where
    L: DeviceLocator,
    G: Geocoder,
{
    let coordinate = locator
        .current_position(PositionOptions::default())
        .await
        .map_err(|err| {
            error!("Error fetching current location: {err}");
            Alert::from(err)
        })?;

    let label = match labelling {
        CurrentLocationLabel::Placeholder(text) => text.clone(),
        CurrentLocationLabel::ReverseGeocode => match geocoder.reverse(coordinate).await {
            Ok(label) => label,
            Err(err) => {
                warn!("Reverse geocoding {coordinate} failed: {err}");
                CURRENT_LOCATION.to_string()
            }
        },
    };
    Ok(NamedLocation::new(label, coordinate))
}
