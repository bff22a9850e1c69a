use geohub_geosearch::{FrameQuery, GeoSearchError, Located, RadiusQuery, within_frame, within_radius};
use geohub_rings::{CoordinateSystem, GeoPoint};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct City {
    name: &'static str,
    location: GeoPoint,
}

impl City {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, location: GeoPoint::new(latitude, longitude) }
    }
}

impl Located for City {
    fn location(&self) -> GeoPoint {
        self.location
    }
}

fn cities() -> Vec<City> {
    vec![
        City::new("Moscow", 55.7558, 37.6173),
        City::new("Zelenograd", 55.9825, 37.1814),
        City::new("Tver", 56.8587, 35.9176),
        City::new("Saint Petersburg", 59.9311, 30.3609),
        City::new("Suva", -18.1416, 178.4415),
    ]
}

fn names(cities: &[City]) -> Vec<&'static str> {
    cities.iter().map(|city| city.name).collect()
}

#[test]
fn radius_search_keeps_nearby_records_in_input_order() {
    let earth = CoordinateSystem::earth();
    let query = RadiusQuery { center: GeoPoint::new(55.7558, 37.6173), radius_meters: 60_000.0 };

    let matches = within_radius(&earth, query, cities()).expect("radius search");

    assert_eq!(names(&matches), ["Moscow", "Zelenograd"]);
}

#[test]
fn radius_search_with_zero_radius_keeps_only_the_center() {
    let earth = CoordinateSystem::earth();
    let query = RadiusQuery { center: GeoPoint::new(55.7558, 37.6173), radius_meters: 0.0 };

    let matches = within_radius(&earth, query, cities()).expect("radius search");

    assert_eq!(names(&matches), ["Moscow"]);
}

#[test]
fn frame_search_keeps_records_between_the_corners() {
    let earth = CoordinateSystem::earth();
    let query = FrameQuery {
        corner_a: GeoPoint::new(55.0, 35.0),
        corner_b: GeoPoint::new(57.0, 39.0),
    };

    let matches = within_frame(&earth, query, cities()).expect("frame search");

    assert_eq!(names(&matches), ["Moscow", "Zelenograd", "Tver"]);
}

#[test]
fn frame_search_is_symmetric_in_the_corners() {
    let earth = CoordinateSystem::earth();
    let forward = FrameQuery {
        corner_a: GeoPoint::new(55.0, 35.0),
        corner_b: GeoPoint::new(57.0, 39.0),
    };
    let swapped = FrameQuery { corner_a: forward.corner_b, corner_b: forward.corner_a };

    assert_eq!(
        within_frame(&earth, forward, cities()).expect("frame search"),
        within_frame(&earth, swapped, cities()).expect("frame search")
    );
}

#[test]
fn frame_across_the_antimeridian_spans_the_long_way() {
    let earth = CoordinateSystem::earth();
    // Corners at 170°E and 170°W. The rectangle construction is not
    // wraparound-aware, so this frame covers the long way around the globe
    // and leaves out Suva at 178.44°E.
    let query = FrameQuery {
        corner_a: GeoPoint::new(0.0, 170.0),
        corner_b: GeoPoint::new(-30.0, -170.0),
    };

    let matches = within_frame(&earth, query, cities()).expect("frame search");

    assert!(matches.is_empty());
}

#[test]
fn an_out_of_range_query_fails_before_any_record_is_read() {
    let earth = CoordinateSystem::earth();
    let query = RadiusQuery { center: GeoPoint::new(0.0, 200.0), radius_meters: 1_000.0 };

    let result = within_radius(&earth, query, cities());

    assert!(matches!(result, Err(GeoSearchError::InvalidQuery { .. })));
}

#[test]
fn an_out_of_range_record_fails_the_whole_query() {
    let earth = CoordinateSystem::earth();
    let query = RadiusQuery { center: GeoPoint::new(55.7558, 37.6173), radius_meters: 60_000.0 };

    let mut candidates = cities();
    candidates.push(City::new("Nowhere", 95.0, 37.0));
    let result = within_radius(&earth, query, candidates);

    assert!(matches!(result, Err(GeoSearchError::InvalidRecord { .. })));
}

#[test]
fn borrowed_candidates_are_supported() {
    let earth = CoordinateSystem::earth();
    let query = RadiusQuery { center: GeoPoint::new(55.7558, 37.6173), radius_meters: 60_000.0 };

    let owned = cities();
    let matches = within_radius(&earth, query, owned.iter()).expect("radius search");

    assert_eq!(matches.len(), 2);
}

#[test]
fn queries_deserialize_from_service_payloads() {
    let raw = json!({
        "center": { "latitude": 55.7558, "longitude": 37.6173 },
        "radius_meters": 60000.0
    });
    let query: RadiusQuery = serde_json::from_value(raw).expect("radius query deserialize");
    assert_eq!(query.radius_meters, 60_000.0);

    let raw = json!({
        "corner_a": { "latitude": 55.0, "longitude": 35.0 },
        "corner_b": { "latitude": 57.0, "longitude": 39.0 }
    });
    let query: FrameQuery = serde_json::from_value(raw).expect("frame query deserialize");
    assert_eq!(query.corner_b, GeoPoint::new(57.0, 39.0));
}
