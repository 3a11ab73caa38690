use locmap::prelude::*;
use tokio::sync::RwLock;

pub struct AppState {
    pub view: RwLock<LocationView>,
    pub geocoder: Nominatim,
}

impl AppState {
    pub fn new(view: LocationView, geocoder: Nominatim) -> Self {
        Self {
            view: RwLock::new(view),
            geocoder,
        }
    }
}

#[cfg(test)]
pub fn test_state() -> std::sync::Arc<AppState> {
    let geocoder = Nominatim::new(locmap::geocoding::Config::default()).unwrap();
    std::sync::Arc::new(AppState::new(LocationView::default(), geocoder))
}
