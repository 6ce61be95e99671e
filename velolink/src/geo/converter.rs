//! Geographic-to-screen projection.
//!
//! [`GeometryConverter`] re-projects map coordinates into a rotated, scaled
//! device-pixel space centered on the rider. One converter is built per
//! frame from the current projection center, scale and forward angle; it
//! owns no resources and is discarded after the frame.

use super::{map_points_per_meter, MapPoint, MapRect};

/// A device-pixel position before clipping or wire saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projects map points into device-pixel space.
///
/// The projection places `map_center` at `anchor` on the screen and rotates
/// the surrounding map by the negated forward angle, so that "up" on the
/// device faces the rider's direction of travel.
///
/// Projection is deterministic and pure; results may lie outside the screen
/// rectangle (callers clip or saturate).
#[derive(Debug, Clone)]
pub struct GeometryConverter {
    screen_width: f64,
    screen_height: f64,
    anchor: ScreenPoint,
    points_per_pixel: f64,
    pixels_per_point: f64,
    top_left: MapPoint,
    forward_angle_deg: f64,
}

impl GeometryConverter {
    /// Build a converter for one frame.
    ///
    /// # Arguments
    ///
    /// * `screen_width`, `screen_height` - target display size in pixels
    /// * `meters_per_pixel` - zoom scale
    /// * `anchor` - pixel position representing the rider on the device
    /// * `map_center` - map point placed at the anchor
    /// * `center_latitude` - latitude of the projection center, for the
    ///   latitude-dependent Mercator scale factor
    /// * `forward_angle_deg` - rider's forward direction in degrees
    pub fn new(
        screen_width: f64,
        screen_height: f64,
        meters_per_pixel: f64,
        anchor: ScreenPoint,
        map_center: MapPoint,
        center_latitude: f64,
        forward_angle_deg: f64,
    ) -> Self {
        let points_per_pixel = meters_per_pixel * map_points_per_meter(center_latitude);
        let pixels_per_point = 1.0 / points_per_pixel;
        let top_left = MapPoint::new(
            map_center.x - points_per_pixel * anchor.x,
            map_center.y - points_per_pixel * anchor.y,
        );
        Self {
            screen_width,
            screen_height,
            anchor,
            points_per_pixel,
            pixels_per_point,
            top_left,
            forward_angle_deg,
        }
    }

    /// Map points covered by one pixel at the current scale and latitude.
    pub fn points_per_pixel(&self) -> f64 {
        self.points_per_pixel
    }

    /// The screen anchor this converter projects the center onto.
    pub fn anchor(&self) -> ScreenPoint {
        self.anchor
    }

    /// The map rectangle currently covered by the screen, ignoring rotation.
    pub fn visible_map_rect(&self) -> MapRect {
        MapRect::new(
            self.top_left,
            self.screen_width * self.points_per_pixel,
            self.screen_height * self.points_per_pixel,
        )
    }

    /// Project a map point into device-pixel space.
    pub fn project(&self, point: MapPoint) -> ScreenPoint {
        let x = (point.x - self.top_left.x) * self.pixels_per_point;
        let y = (point.y - self.top_left.y) * self.pixels_per_point;
        self.rotate_around_anchor(ScreenPoint::new(x, y), -self.forward_angle_deg)
    }

    fn rotate_around_anchor(&self, target: ScreenPoint, by_degrees: f64) -> ScreenPoint {
        let dx = target.x - self.anchor.x;
        let dy = target.y - self.anchor.y;
        let radius = (dx * dx + dy * dy).sqrt();
        let azimuth = dy.atan2(dx);
        let new_azimuth = azimuth + by_degrees.to_radians();
        ScreenPoint::new(
            self.anchor.x + radius * new_azimuth.cos(),
            self.anchor.y + radius * new_azimuth.sin(),
        )
    }
}
