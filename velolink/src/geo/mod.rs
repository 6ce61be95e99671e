//! Geographic coordinate math.
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and the planar Web Mercator "map point" space used for screen projection,
//! plus the spherical helpers (distance, bearing, destination point) needed
//! by course estimation and heading-arrow construction.
//!
//! # Design
//!
//! Map points are Web Mercator world coordinates with a fixed world width of
//! 2^28 points. The scale of this projection is not uniform: one meter covers
//! more map points the further the latitude is from the equator. Every
//! conversion that depends on that factor recomputes it from the latitude it
//! is given; nothing is cached across centers.

mod converter;

pub use converter::{GeometryConverter, ScreenPoint};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Width and height of the Web Mercator world in map points (2^28).
pub const WORLD_MAP_POINTS: f64 = 268_435_456.0;

/// Earth radius of the Web Mercator reference sphere, in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Maximum latitude representable in Web Mercator.
pub const MAX_LAT: f64 = 85.051_128_78;

/// Minimum latitude representable in Web Mercator.
pub const MIN_LAT: f64 = -MAX_LAT;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geographic point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A position in planar Web Mercator map-point space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    /// Create a new map point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in map-point space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    /// Top-left corner (minimum x, minimum y).
    pub origin: MapPoint,
    /// Extent along x, in map points.
    pub width: f64,
    /// Extent along y, in map points.
    pub height: f64,
}

impl MapRect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(origin: MapPoint, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Create the bounding rectangle of two points.
    pub fn from_corners(a: MapPoint, b: MapPoint) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            origin: MapPoint::new(min_x, min_y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Whether this rectangle overlaps another (touching edges count).
    pub fn intersects(&self, other: &MapRect) -> bool {
        self.origin.x <= other.origin.x + other.width
            && other.origin.x <= self.origin.x + self.width
            && self.origin.y <= other.origin.y + other.height
            && other.origin.y <= self.origin.y + self.height
    }
}

/// Converts a geographic point to Web Mercator map points.
///
/// Latitude is clamped to the Web Mercator range rather than rejected;
/// the display pipeline degrades gracefully instead of erroring.
#[inline]
pub fn geo_to_map(point: GeoPoint) -> MapPoint {
    let lat = point.latitude.clamp(MIN_LAT, MAX_LAT);
    let x = (point.longitude + 180.0) / 360.0 * WORLD_MAP_POINTS;
    let lat_rad = lat * PI / 180.0;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * WORLD_MAP_POINTS;
    MapPoint::new(x, y)
}

/// Converts a Web Mercator map point back to geographic coordinates.
#[inline]
pub fn map_to_geo(point: MapPoint) -> GeoPoint {
    let lon = point.x / WORLD_MAP_POINTS * 360.0 - 180.0;
    let y = point.y / WORLD_MAP_POINTS;
    let lat_rad = (PI * (1.0 - 2.0 * y)).sinh().atan();
    GeoPoint::new(lat_rad * 180.0 / PI, lon)
}

/// Map points covered by one meter at the given latitude.
///
/// The Mercator projection stretches with 1/cos(latitude), so this factor
/// must be recomputed whenever the reference latitude changes.
#[inline]
pub fn map_points_per_meter(latitude: f64) -> f64 {
    let lat = latitude.clamp(MIN_LAT, MAX_LAT);
    let circumference = 2.0 * PI * EARTH_RADIUS_M;
    WORLD_MAP_POINTS / (circumference * (lat * PI / 180.0).cos())
}

/// Great-circle distance between two geographic points, in meters.
///
/// Haversine formula on the Web Mercator reference sphere.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Great-circle initial bearing from one point toward another.
///
/// Returns degrees in [0, 360), where 0 = North, 90 = East.
pub fn initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = y.atan2(x).to_degrees();

    if bearing < 0.0 {
        bearing + 360.0
    } else {
        bearing
    }
}

/// Point reached by travelling `distance_m` meters from `origin` along the
/// given initial bearing (degrees clockwise from north).
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_m / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}
