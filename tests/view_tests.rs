use locmap::{
    device::{self, DeviceLocator, FixedLocator, PositionOptions, UnsupportedLocator},
    geocoding::{self, Geocoder, Place},
    prelude::*,
    view::{CURRENT_LOCATION, UNSUPPORTED_MESSAGE},
};
use std::{collections::HashMap, future::Future};

struct StubGeocoder {
    places: HashMap<&'static str, Coordinate>,
    reverse: Option<String>,
}

impl StubGeocoder {
    fn new(places: &[(&'static str, Coordinate)]) -> Self {
        Self {
            places: places.iter().copied().collect(),
            reverse: None,
        }
    }

    fn with_reverse(mut self, label: &str) -> Self {
        self.reverse = Some(label.to_string());
        self
    }
}

impl Geocoder for StubGeocoder {
    async fn resolve(&self, name: &str) -> Result<Place, geocoding::Error> {
        self.places
            .get(name)
            .map(|coordinate| Place {
                coordinate: *coordinate,
                display_name: format!("{name}, India"),
            })
            .ok_or_else(|| geocoding::Error::NotFound(name.to_string()))
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<String, geocoding::Error> {
        self.reverse
            .clone()
            .ok_or_else(|| geocoding::Error::NotFound(coordinate.to_string()))
    }
}

struct DeniedLocator;

impl DeviceLocator for DeniedLocator {
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, device::Error>> + Send {
        assert!(options.high_accuracy);
        std::future::ready(Err(device::Error::PermissionDenied))
    }
}

const DELHI: Coordinate = Coordinate::new(28.6139, 77.209);
const GOA: Coordinate = Coordinate::new(15.2993, 74.124);

fn snapshot(view: &LocationView) -> (NamedLocation, NamedLocation) {
    (view.start().clone(), view.destination().clone())
}

fn assert_consistent(view: &LocationView) {
    let expected = view
        .start()
        .coordinate
        .distance(&view.destination().coordinate)
        .rounded();
    assert_eq!(view.distance(), Some(expected));
}

#[test]
fn defaults_test() {
    let view = LocationView::default();
    assert_eq!(view.start().label, "Mumbai");
    assert_eq!(view.start().coordinate, Coordinate::new(19.076, 72.8777));
    assert_eq!(view.destination().label, "Pune");
    assert_eq!(view.destination().coordinate, Coordinate::new(18.5204, 73.8567));
    assert_eq!(view.distance_text().as_deref(), Some("Distance: 120.15 km"));
}

#[test]
fn distance_absent_until_computed_test() {
    let mut view = LocationView::blank(ViewConfig::default());
    assert!(view.distance().is_none());
    assert!(view.distance_text().is_none());
    assert!(view.scene().distance.is_none());

    view.set_coordinate(Side::Destination, GOA);
    assert_consistent(&view);
    let text = view.distance_text().unwrap();
    assert!(text.starts_with("Distance: "));
    assert!(text.ends_with(" km"));
    let number = text.trim_start_matches("Distance: ").trim_end_matches(" km");
    assert_eq!(number.split('.').nth(1).map(str::len), Some(2));
    assert_eq!(view.scene().distance, Some(text));
}

#[test]
fn swap_test() {
    let mut view = LocationView::default();
    let (start, destination) = snapshot(&view);
    let distance = view.distance();

    view.swap();
    assert_eq!(view.start(), &destination);
    assert_eq!(view.destination(), &start);
    assert_eq!(view.distance(), distance);

    view.swap();
    assert_eq!(snapshot(&view), (start, destination));
}

#[test]
fn label_edit_keeps_distance_test() {
    let mut view = LocationView::default();
    let distance = view.distance();
    view.set_label(Side::Start, "Delhi");
    assert_eq!(view.label(Side::Start), "Delhi");
    assert_eq!(view.start().coordinate, Coordinate::new(19.076, 72.8777));
    assert_eq!(view.distance(), distance);
}

#[tokio::test]
async fn search_updates_both_sides_test() {
    let geocoder = StubGeocoder::new(&[("Delhi", DELHI), ("Goa", GOA)]);
    let mut view = LocationView::default();
    view.set_label(Side::Start, "Delhi");
    view.set_label(Side::Destination, "Goa");

    let report = view.search(&geocoder).await;
    assert!(report.start.is_updated());
    assert!(report.destination.is_updated());
    assert_eq!(view.start().coordinate, DELHI);
    assert_eq!(view.destination().coordinate, GOA);
    assert_eq!(view.label(Side::Start), "Delhi");
    assert_consistent(&view);
}

#[tokio::test]
async fn search_partial_failure_test() {
    let geocoder = StubGeocoder::new(&[("Goa", GOA)]);
    let mut view = LocationView::default();
    let start = view.start().clone();
    view.set_label(Side::Start, "Atlantis");
    view.set_label(Side::Destination, "Goa");

    let report = view.search(&geocoder).await;
    assert!(matches!(report.start, Resolution::Unchanged { .. }));
    assert_eq!(report.destination, Resolution::Updated { coordinate: GOA });
    assert_eq!(view.start().coordinate, start.coordinate);
    assert_eq!(view.destination().coordinate, GOA);
    assert_consistent(&view);
}

#[tokio::test]
async fn search_labels_from_display_name_test() {
    let geocoder = StubGeocoder::new(&[("Delhi", DELHI), ("Goa", GOA)]);
    let mut view = LocationView::new(ViewConfig {
        label_from_search: true,
        ..Default::default()
    });
    view.set_label(Side::Start, "Delhi");
    view.set_label(Side::Destination, "Goa");
    view.search(&geocoder).await;
    assert_eq!(view.label(Side::Start), "Delhi, India");
    assert_eq!(view.label(Side::Destination), "Goa, India");
}

#[tokio::test]
async fn device_location_placeholder_test() {
    let geocoder = StubGeocoder::new(&[]);
    let mut view = LocationView::default();
    let destination = view.destination().clone();

    view.use_device_location(&FixedLocator(DELHI), &geocoder)
        .await
        .unwrap();
    assert_eq!(view.start(), &NamedLocation::new(CURRENT_LOCATION, DELHI));
    assert_eq!(view.destination(), &destination);
    assert_consistent(&view);
}

#[tokio::test]
async fn device_location_reverse_label_test() {
    let config = ViewConfig {
        current_location_label: CurrentLocationLabel::ReverseGeocode,
        ..Default::default()
    };

    let geocoder = StubGeocoder::new(&[]).with_reverse("Connaught Place, 110001");
    let mut view = LocationView::new(config.clone());
    view.use_device_location(&FixedLocator(DELHI), &geocoder)
        .await
        .unwrap();
    assert_eq!(view.label(Side::Start), "Connaught Place, 110001");

    let geocoder = StubGeocoder::new(&[]);
    let mut view = LocationView::new(config);
    view.use_device_location(&FixedLocator(DELHI), &geocoder)
        .await
        .unwrap();
    assert_eq!(view.label(Side::Start), CURRENT_LOCATION);
    assert_eq!(view.start().coordinate, DELHI);
}

#[tokio::test]
async fn device_location_unsupported_test() {
    let geocoder = StubGeocoder::new(&[]);
    let mut view = LocationView::default();
    let before = snapshot(&view);
    let distance = view.distance();

    let alert = view
        .use_device_location(&UnsupportedLocator, &geocoder)
        .await
        .unwrap_err();
    assert_eq!(alert.message, UNSUPPORTED_MESSAGE);
    assert_eq!(snapshot(&view), before);
    assert_eq!(view.distance(), distance);
}

#[tokio::test]
async fn device_location_denied_test() {
    let geocoder = StubGeocoder::new(&[]);
    let mut view = LocationView::default();
    let before = snapshot(&view);

    let alert = view
        .use_device_location(&DeniedLocator, &geocoder)
        .await
        .unwrap_err();
    assert!(alert.message.contains("denied"));
    assert_eq!(snapshot(&view), before);
}

#[test]
fn scene_test() {
    let view = LocationView::default();
    let scene = view.scene();
    assert_eq!(scene.center, view.start().coordinate);
    assert_eq!(scene.zoom, 6);
    assert_eq!(scene.markers[0].popup, "Mumbai");
    assert_eq!(scene.markers[1].position, view.destination().coordinate);
    assert!((scene.labels[0].position.latitude - 19.276).abs() < 1e-9);
    assert_eq!(scene.labels[1].text, "Pune");
    assert_eq!(
        scene.route.points,
        [view.start().coordinate, view.destination().coordinate]
    );
    assert_eq!(scene.route.color, "red");
    assert_eq!(scene.route.weight, 6);
    assert!(scene.tiles.url.contains("opentopomap"));
}
