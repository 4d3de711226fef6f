/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Keys are lowercase.
const CITY_COORDINATES: &[(&str, GeoCoordinate)] = &[
    ("boston", GeoCoordinate::new(42.3, -71.1)),
    ("san francisco", GeoCoordinate::new(37.7, -122.4)),
    ("london", GeoCoordinate::new(51.5, -0.1)),
];

/// Cities fetched on every run, in output order.
pub const DEFAULT_CITIES: &[&str] = &["boston", "san francisco", "london"];

/// Case-insensitive lookup in the fixed coordinate table.
pub fn lookup(city: &str) -> Option<GeoCoordinate> {
    let lower = city.to_lowercase();

    CITY_COORDINATES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, coord)| *coord)
}

pub fn known_cities() -> impl Iterator<Item = &'static str> {
    CITY_COORDINATES.iter().map(|(name, _)| *name)
}
