pub mod device;
pub mod geocoding;
pub mod shared;
pub mod view;

pub mod prelude {
    pub use crate::device::{DeviceLocator, FixedLocator, PositionOptions, UnsupportedLocator};
    pub use crate::geocoding::{Geocoder, Nominatim, Place};
    pub use crate::shared::geo::{Coordinate, Distance};
    pub use crate::view::{
        Alert, CurrentLocationLabel, LocationView, NamedLocation, Resolution, SearchReport, Side,
        ViewConfig, scene::MapScene,
    };
}
