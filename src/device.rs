use std::future::{self, Future};
use thiserror::Error;

use crate::shared::geo::Coordinate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Permission to read the device location was denied")]
    PermissionDenied,
    #[error("Device position is unavailable")]
    Unavailable,
    #[error("Timed out waiting for the device position")]
    Timeout,
}

#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub high_accuracy: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
        }
    }
}

/// Platform capability yielding the current device position, one shot per call.
pub trait DeviceLocator {
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, self::Error>> + Send;
}

/// Reports a position known up front, e.g. one posted by a browser.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator(pub Coordinate);

impl DeviceLocator for FixedLocator {
    fn current_position(
        &self,
        _: PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, self::Error>> + Send {
        future::ready(Ok(self.0))
    }
}

/// Platform without a location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedLocator;

impl DeviceLocator for UnsupportedLocator {
    fn current_position(
        &self,
        _: PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, self::Error>> + Send {
        future::ready(Err(self::Error::Unsupported))
    }
}
