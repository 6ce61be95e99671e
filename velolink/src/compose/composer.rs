//! Frame composition pipeline.

use crate::course::{CourseEstimator, LocationSample};
use crate::geo::{
    destination_point, geo_to_map, GeoPoint, GeometryConverter, MapPoint, MapRect, ScreenPoint,
};
use crate::protocol::{DrawPrimitive, PixelPoint};
use crate::settings::{DisplayInfo, DisplaySettings, PositionSource, UpSource};

use super::scheme::Palette;
use super::viewport::anchor_for_display;

/// Forward distance of the heading-arrow tip, in line-width units.
const ARROW_TIP_FACTOR: f64 = 6.0;

/// Distance of the heading-arrow wings, in line-width units.
const ARROW_WING_FACTOR: f64 = 3.5;

/// Distance of the heading-arrow tail notch, in line-width units.
const ARROW_NOTCH_FACTOR: f64 = 1.5;

/// Bearing offset of the arrow wings from the forward direction, degrees.
const ARROW_WING_BEARING: f64 = 135.0;

/// Accuracy-circle radius bounds in pixels; outside these the circle is
/// either visual noise or beyond the protocol's 8-bit radius.
const ACCURACY_RADIUS_MIN: f64 = 10.0;
const ACCURACY_RADIUS_MAX: f64 = 255.0;

/// Accuracy-circle cap as a fraction of the smaller screen dimension.
const ACCURACY_RADIUS_SCREEN_CAP: f64 = 0.44;

/// Breadcrumb intensity drop per position going back in time.
const BREADCRUMB_FADE_STEP: f64 = 0.08;

/// Breadcrumb intensity floor for the oldest positions.
const BREADCRUMB_FADE_FLOOR: f64 = 0.58;

/// Everything known about the rider at composition time.
#[derive(Debug, Clone)]
pub struct RiderState {
    /// Latest real GPS fix, if any.
    pub fix: Option<LocationSample>,
    /// Latest device-reported course over ground, degrees.
    pub device_course: Option<f64>,
    /// Latest device-reported compass heading, degrees.
    pub compass_heading: Option<f64>,
    /// Whether the controlling app is backgrounded (forces the real fix).
    pub backgrounded: bool,
    /// Projection center when the real fix is unavailable or not selected.
    pub fallback_point: GeoPoint,
}

impl Default for RiderState {
    fn default() -> Self {
        Self {
            fix: None,
            device_course: None,
            compass_heading: None,
            backgrounded: false,
            fallback_point: GeoPoint::new(0.0, 0.0),
        }
    }
}

/// Builds the ordered primitive list for one frame.
///
/// Constructed fresh per redraw from the current settings; the only state
/// that persists across frames is the course history, which the caller
/// owns and passes in.
#[derive(Debug)]
pub struct FrameComposer {
    settings: DisplaySettings,
    display: DisplayInfo,
    palette: Palette,
}

impl FrameComposer {
    /// Create a composer for the given settings and display.
    pub fn new(settings: DisplaySettings, display: DisplayInfo) -> Self {
        let palette = Palette::for_scheme(settings.color_scheme);
        Self {
            settings,
            display,
            palette,
        }
    }

    /// Compose one frame.
    ///
    /// The result always starts with a clear and ends with a present;
    /// everything between is drawn in z-order, later over earlier. All
    /// coordinates are saturated to wire range, so a frame is produced no
    /// matter how far geometry projects off-screen.
    pub fn compose(
        &self,
        rider: &RiderState,
        route: &[GeoPoint],
        estimator: &mut CourseEstimator,
    ) -> Vec<DrawPrimitive> {
        let center = self.resolve_center(rider);
        estimator.add_sample_if_moved(center);

        let forward_angle = self.resolve_forward_angle(rider, estimator, &center);

        let anchor = anchor_for_display(self.display);
        let converter = GeometryConverter::new(
            f64::from(self.display.width),
            f64::from(self.display.height),
            self.settings.meters_per_pixel,
            anchor,
            geo_to_map(center.point),
            center.point.latitude,
            forward_angle,
        );

        let mut frame = Vec::new();
        frame.push(DrawPrimitive::Clear(self.palette.background));
        self.push_accuracy_circle(&mut frame, &converter, &center);
        self.push_route(&mut frame, &converter, geo_to_map(center.point), route);
        self.push_breadcrumbs(&mut frame, &converter, estimator);
        self.push_heading_indicator(&mut frame, &converter, rider, center.point);
        frame.push(DrawPrimitive::Present);
        frame
    }

    /// The projection center for this frame, with the accuracy that goes
    /// with it.
    ///
    /// A real fix wins when the position source is real or the app is
    /// backgrounded; otherwise the fallback point stands in, carrying the
    /// simulated accuracy.
    fn resolve_center(&self, rider: &RiderState) -> LocationSample {
        match rider.fix {
            Some(fix)
                if self.settings.position_source == PositionSource::Real
                    || rider.backgrounded =>
            {
                fix
            }
            _ => LocationSample::new(
                rider.fallback_point,
                self.settings.simulated_accuracy.accuracy_meters(),
            ),
        }
    }

    fn resolve_forward_angle(
        &self,
        rider: &RiderState,
        estimator: &CourseEstimator,
        center: &LocationSample,
    ) -> f64 {
        match self.settings.up_source {
            UpSource::NorthUp => 0.0,
            UpSource::SystemCourseUp => rider.device_course.unwrap_or(0.0),
            UpSource::CustomCourseUp => estimator.compute_course(center),
            UpSource::HeadingUp => rider.compass_heading.unwrap_or(0.0),
        }
    }

    fn push_accuracy_circle(
        &self,
        frame: &mut Vec<DrawPrimitive>,
        converter: &GeometryConverter,
        center: &LocationSample,
    ) {
        let cap =
            ACCURACY_RADIUS_SCREEN_CAP * f64::from(self.display.width.min(self.display.height));
        let radius = (center.horizontal_accuracy_m / self.settings.meters_per_pixel).min(cap);
        if (ACCURACY_RADIUS_MIN..=ACCURACY_RADIUS_MAX).contains(&radius) {
            let anchor = converter.anchor();
            frame.push(DrawPrimitive::Circle {
                center: PixelPoint::saturating(anchor.x, anchor.y),
                radius: radius.round() as u8,
                color: self.palette.accuracy_circle,
            });
        }
    }

    /// Route segments clipped by bounding box, or a helper line toward the
    /// closest route point when the whole route is off-screen.
    ///
    /// The per-segment test is conservative: an axis-aligned box around the
    /// segment against the visible rectangle. Long diagonal segments can
    /// pass the test without actually crossing the screen; the display
    /// clips those for free.
    fn push_route(
        &self,
        frame: &mut Vec<DrawPrimitive>,
        converter: &GeometryConverter,
        center_map: MapPoint,
        route: &[GeoPoint],
    ) {
        if route.len() < 2 {
            return;
        }

        let visible = converter.visible_map_rect();
        let width = self.stroke_width();
        let mut any_visible = false;

        for pair in route.windows(2) {
            let a = geo_to_map(pair[0]);
            let b = geo_to_map(pair[1]);
            if MapRect::from_corners(a, b).intersects(&visible) {
                frame.push(DrawPrimitive::Line {
                    from: saturate(converter.project(a)),
                    to: saturate(converter.project(b)),
                    color: self.palette.route,
                    width,
                });
                any_visible = true;
            }
        }

        if !any_visible {
            let closest = route.iter().map(|&p| geo_to_map(p)).min_by(|a, b| {
                planar_distance_sq(*a, center_map).total_cmp(&planar_distance_sq(*b, center_map))
            });
            if let Some(closest) = closest {
                let anchor = converter.anchor();
                frame.push(DrawPrimitive::Line {
                    from: PixelPoint::saturating(anchor.x, anchor.y),
                    to: saturate(converter.project(closest)),
                    color: self.palette.helper_line,
                    width,
                });
            }
        }
    }

    /// Breadcrumb trail: every history sample except the most recent, as
    /// small filled circles fading with age.
    fn push_breadcrumbs(
        &self,
        frame: &mut Vec<DrawPrimitive>,
        converter: &GeometryConverter,
        estimator: &CourseEstimator,
    ) {
        let count = estimator.len();
        if count < 2 {
            return;
        }

        let radius = self.stroke_width();
        let drawn = count - 1;
        for (index, sample) in estimator.samples().take(drawn).enumerate() {
            let age_steps = (drawn - 1 - index) as f64;
            let intensity = (1.0 - BREADCRUMB_FADE_STEP * age_steps).max(BREADCRUMB_FADE_FLOOR);
            frame.push(DrawPrimitive::Disc {
                center: saturate(converter.project(geo_to_map(sample.point))),
                radius,
                color: self.palette.recent_points.scaled(intensity),
            });
        }
    }

    /// Heading indicator at the anchor.
    ///
    /// In the course-up modes the map itself rotates, so the arrow is a
    /// fixed screen-space shape pointing up. Otherwise the arrow is built
    /// from bearing-offset geographic points and projected, keeping its
    /// ground size constant across zoom levels. Outline lines around the
    /// triangles are not sent.
    fn push_heading_indicator(
        &self,
        frame: &mut Vec<DrawPrimitive>,
        converter: &GeometryConverter,
        rider: &RiderState,
        center: GeoPoint,
    ) {
        let scale = self.settings.line_width_scale;
        match self.settings.up_source {
            UpSource::SystemCourseUp | UpSource::CustomCourseUp => {
                let anchor = converter.anchor();
                let at = |bearing_deg: f64, distance: f64| {
                    let rad = bearing_deg.to_radians();
                    PixelPoint::saturating(
                        anchor.x + distance * rad.sin(),
                        anchor.y - distance * rad.cos(),
                    )
                };
                let tip = at(0.0, ARROW_TIP_FACTOR * scale);
                let left = at(-ARROW_WING_BEARING, ARROW_WING_FACTOR * scale);
                let right = at(ARROW_WING_BEARING, ARROW_WING_FACTOR * scale);
                let notch = at(180.0, ARROW_NOTCH_FACTOR * scale);
                self.push_arrow(frame, tip, left, right, notch);
            }
            _ => {
                let Some(heading) = rider.compass_heading else {
                    return;
                };
                let meters = |factor: f64| factor * scale * self.settings.meters_per_pixel;
                let at = |bearing_offset: f64, distance_m: f64| {
                    let point = destination_point(center, heading + bearing_offset, distance_m);
                    saturate(converter.project(geo_to_map(point)))
                };
                let tip = at(0.0, meters(ARROW_TIP_FACTOR));
                let left = at(-ARROW_WING_BEARING, meters(ARROW_WING_FACTOR));
                let right = at(ARROW_WING_BEARING, meters(ARROW_WING_FACTOR));
                let notch = at(180.0, meters(ARROW_NOTCH_FACTOR));
                self.push_arrow(frame, tip, left, right, notch);
            }
        }
    }

    fn push_arrow(
        &self,
        frame: &mut Vec<DrawPrimitive>,
        tip: PixelPoint,
        left: PixelPoint,
        right: PixelPoint,
        notch: PixelPoint,
    ) {
        frame.push(DrawPrimitive::Triangle {
            p1: tip,
            p2: left,
            p3: notch,
            color: self.palette.position_indicator,
        });
        frame.push(DrawPrimitive::Triangle {
            p1: tip,
            p2: right,
            p3: notch,
            color: self.palette.position_indicator,
        });
    }

    /// Stroke width and indicator radius from the line-width setting.
    fn stroke_width(&self) -> u8 {
        self.settings.line_width_scale.round().clamp(1.0, 255.0) as u8
    }
}

fn saturate(point: ScreenPoint) -> PixelPoint {
    PixelPoint::saturating(point.x, point.y)
}

fn planar_distance_sq(a: MapPoint, b: MapPoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Rgb;
    use crate::settings::SchemeKind;

    const HISTORY_CAPACITY_PLUS: usize = 25;

    fn north_up_settings() -> DisplaySettings {
        DisplaySettings {
            up_source: UpSource::NorthUp,
            ..DisplaySettings::default()
        }
    }

    fn rider_at(lat: f64, lon: f64, accuracy: f64) -> RiderState {
        RiderState {
            fix: Some(LocationSample::new(GeoPoint::new(lat, lon), accuracy)),
            ..RiderState::default()
        }
    }

    fn lines(frame: &[DrawPrimitive]) -> Vec<&DrawPrimitive> {
        frame
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .collect()
    }

    #[test]
    fn test_frame_starts_with_clear_ends_with_present() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &[], &mut estimator);
        assert!(matches!(frame.first(), Some(DrawPrimitive::Clear(_))));
        assert!(matches!(frame.last(), Some(DrawPrimitive::Present)));
    }

    #[test]
    fn test_clear_uses_scheme_background() {
        let settings = DisplaySettings {
            color_scheme: SchemeKind::Light,
            up_source: UpSource::NorthUp,
            ..DisplaySettings::default()
        };
        let composer = FrameComposer::new(settings, DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &[], &mut estimator);
        assert_eq!(frame[0], DrawPrimitive::Clear(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_due_east_route_extends_rightward_from_anchor() {
        // Spec scenario: route [(0,0), (0, 0.001)], rider at (0,0), north-up,
        // 1.5 m/px, 128x128. The segment runs due east, so the line starts
        // near the anchor and extends to the right at the anchor's height.
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let route = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.001)];
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &route, &mut estimator);

        let route_lines = lines(&frame);
        assert_eq!(route_lines.len(), 1);
        let DrawPrimitive::Line {
            from, to, color, ..
        } = route_lines[0]
        else {
            unreachable!()
        };
        assert_eq!(*color, Palette::for_scheme(SchemeKind::Dark).route);
        // Anchor for 128x128 is (64, 70.4)
        assert!((i32::from(from.x) - 64).abs() <= 1);
        assert!((i32::from(from.y) - 70).abs() <= 1);
        assert!(to.x > from.x, "line should extend east (rightward)");
        assert!((i32::from(to.y) - 70).abs() <= 1);
    }

    #[test]
    fn test_offscreen_route_yields_helper_line() {
        // Route ~110 km north of the rider: no segment box intersects the
        // ~200 m viewport, so a single helper line points at the closest point.
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let route = [GeoPoint::new(1.0, 0.0), GeoPoint::new(1.0, 0.001)];
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &route, &mut estimator);

        let route_lines = lines(&frame);
        assert_eq!(route_lines.len(), 1);
        let DrawPrimitive::Line {
            from, to, color, ..
        } = route_lines[0]
        else {
            unreachable!()
        };
        assert_eq!(*color, Palette::for_scheme(SchemeKind::Dark).helper_line);
        assert_eq!((from.x, from.y), (64, 70));
        // Far north projects to a hugely negative y, saturated to wire minimum
        assert_eq!(to.y, crate::protocol::MIN_PIXEL_COORD);
    }

    #[test]
    fn test_single_point_route_draws_nothing() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(
            &rider_at(0.0, 0.0, 5.0),
            &[GeoPoint::new(0.0, 0.0)],
            &mut estimator,
        );
        assert!(lines(&frame).is_empty());
    }

    #[test]
    fn test_accuracy_circle_emitted_in_band() {
        // 30 m at 1.5 m/px is a 20 px radius: inside [10, 255]
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 30.0), &[], &mut estimator);
        let circle = frame
            .iter()
            .find(|p| matches!(p, DrawPrimitive::Circle { .. }));
        let Some(DrawPrimitive::Circle { center, radius, .. }) = circle else {
            panic!("expected an accuracy circle");
        };
        assert_eq!(*radius, 20);
        assert_eq!((center.x, center.y), (64, 70));
    }

    #[test]
    fn test_accuracy_circle_suppressed_when_tiny() {
        // 5 m at 1.5 m/px is ~3 px: below the 10 px floor
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &[], &mut estimator);
        assert!(!frame
            .iter()
            .any(|p| matches!(p, DrawPrimitive::Circle { .. })));
    }

    #[test]
    fn test_accuracy_circle_capped_by_screen() {
        // 500 m at 1.5 m/px would be 333 px; the cap is 0.44 * 128 = 56.3
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 500.0), &[], &mut estimator);
        let Some(DrawPrimitive::Circle { radius, .. }) = frame
            .iter()
            .find(|p| matches!(p, DrawPrimitive::Circle { .. }))
        else {
            panic!("expected an accuracy circle");
        };
        assert_eq!(*radius, 56);
    }

    #[test]
    fn test_breadcrumbs_skip_most_recent_and_fade() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();

        // Pre-load five retained positions spaced 10 m apart going north
        let mut point = GeoPoint::new(0.0, 0.0);
        for _ in 0..5 {
            estimator.add_sample_if_moved(LocationSample::new(point, 5.0));
            point = destination_point(point, 0.0, 10.0);
        }

        // Composing from the next position appends a sixth sample
        let frame = composer.compose(
            &rider_at(point.latitude, point.longitude, 5.0),
            &[],
            &mut estimator,
        );
        assert_eq!(estimator.len(), 6);

        let discs: Vec<_> = frame
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Disc { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(discs.len(), 5);

        // Oldest first: intensity climbs toward full green at the newest
        let green = Palette::for_scheme(SchemeKind::Dark).recent_points;
        assert_eq!(*discs.last().unwrap(), green);
        for pair in discs.windows(2) {
            assert!(pair[0].g <= pair[1].g);
        }
        assert_eq!(discs[0], green.scaled(1.0 - 4.0 * 0.08));
    }

    #[test]
    fn test_breadcrumb_fade_floor() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let mut point = GeoPoint::new(0.0, 0.0);
        for _ in 0..HISTORY_CAPACITY_PLUS {
            estimator.add_sample_if_moved(LocationSample::new(point, 5.0));
            point = destination_point(point, 0.0, 10.0);
        }
        let frame = composer.compose(
            &rider_at(point.latitude, point.longitude, 5.0),
            &[],
            &mut estimator,
        );
        let green = Palette::for_scheme(SchemeKind::Dark).recent_points;
        let oldest = frame
            .iter()
            .find_map(|p| match p {
                DrawPrimitive::Disc { color, .. } => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(oldest, green.scaled(0.58));
    }

    #[test]
    fn test_course_up_emits_screen_space_arrow() {
        let composer = FrameComposer::new(DisplaySettings::default(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &[], &mut estimator);

        let triangles: Vec<_> = frame
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Triangle { .. }))
            .collect();
        assert_eq!(triangles.len(), 2);

        // Default line width 2: tip 12 px above the anchor
        let DrawPrimitive::Triangle { p1, .. } = triangles[0] else {
            unreachable!()
        };
        assert_eq!((p1.x, p1.y), (64, 58));
    }

    #[test]
    fn test_north_up_without_compass_has_no_arrow() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let frame = composer.compose(&rider_at(0.0, 0.0, 5.0), &[], &mut estimator);
        assert!(!frame
            .iter()
            .any(|p| matches!(p, DrawPrimitive::Triangle { .. })));
    }

    #[test]
    fn test_north_up_with_compass_projects_geographic_arrow() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let rider = RiderState {
            compass_heading: Some(90.0),
            ..rider_at(0.0, 0.0, 5.0)
        };
        let frame = composer.compose(&rider, &[], &mut estimator);

        let triangles: Vec<_> = frame
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Triangle { p1, .. } => Some(*p1),
                _ => None,
            })
            .collect();
        assert_eq!(triangles.len(), 2);
        // Heading east with north up: the tip sits right of the anchor
        assert!(triangles[0].x > 64);
        assert!((i32::from(triangles[0].y) - 70).abs() <= 1);
    }

    #[test]
    fn test_fallback_center_when_no_fix() {
        let composer = FrameComposer::new(north_up_settings(), DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let rider = RiderState {
            fallback_point: GeoPoint::new(0.0, 0.0),
            ..RiderState::default()
        };
        // Route through the fallback point is visible even with no fix
        let route = [GeoPoint::new(0.0, -0.0001), GeoPoint::new(0.0, 0.0001)];
        let frame = composer.compose(&rider, &route, &mut estimator);
        assert_eq!(lines(&frame).len(), 1);
    }

    #[test]
    fn test_map_view_center_source_ignores_fix() {
        let settings = DisplaySettings {
            position_source: PositionSource::MapViewCenter,
            up_source: UpSource::NorthUp,
            ..DisplaySettings::default()
        };
        let composer = FrameComposer::new(settings, DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let rider = RiderState {
            fallback_point: GeoPoint::new(0.0, 0.0),
            // Fix far away; center must stay on the fallback point
            ..rider_at(10.0, 10.0, 5.0)
        };
        let route = [GeoPoint::new(0.0, -0.0001), GeoPoint::new(0.0, 0.0001)];
        let frame = composer.compose(&rider, &route, &mut estimator);
        let route_lines = lines(&frame);
        assert_eq!(route_lines.len(), 1);
        let DrawPrimitive::Line { color, .. } = route_lines[0] else {
            unreachable!()
        };
        assert_eq!(*color, Palette::for_scheme(SchemeKind::Dark).route);
    }

    #[test]
    fn test_backgrounded_forces_real_fix() {
        let settings = DisplaySettings {
            position_source: PositionSource::MapViewCenter,
            up_source: UpSource::NorthUp,
            ..DisplaySettings::default()
        };
        let composer = FrameComposer::new(settings, DisplayInfo::default());
        let mut estimator = CourseEstimator::new();
        let rider = RiderState {
            backgrounded: true,
            fallback_point: GeoPoint::new(10.0, 10.0),
            ..rider_at(0.0, 0.0, 5.0)
        };
        let route = [GeoPoint::new(0.0, -0.0001), GeoPoint::new(0.0, 0.0001)];
        let frame = composer.compose(&rider, &route, &mut estimator);
        let route_lines = lines(&frame);
        let DrawPrimitive::Line { color, .. } = route_lines[0] else {
            unreachable!()
        };
        assert_eq!(*color, Palette::for_scheme(SchemeKind::Dark).route);
    }

    #[test]
    fn test_z_order() {
        // With everything present: clear, accuracy circle, route, discs,
        // triangles, present - strictly in that order.
        let composer = FrameComposer::new(
            DisplaySettings {
                up_source: UpSource::CustomCourseUp,
                ..DisplaySettings::default()
            },
            DisplayInfo::default(),
        );
        let mut estimator = CourseEstimator::new();
        let mut point = GeoPoint::new(0.0, 0.0);
        for _ in 0..5 {
            estimator.add_sample_if_moved(LocationSample::new(point, 5.0));
            point = destination_point(point, 0.0, 10.0);
        }
        let route = [
            GeoPoint::new(point.latitude, point.longitude - 0.0001),
            GeoPoint::new(point.latitude, point.longitude + 0.0001),
        ];
        let rider = rider_at(point.latitude, point.longitude, 30.0);
        let frame = composer.compose(&rider, &route, &mut estimator);

        let kind_rank = |p: &DrawPrimitive| match p {
            DrawPrimitive::Clear(_) => 0,
            DrawPrimitive::Circle { .. } => 1,
            DrawPrimitive::Line { .. } => 2,
            DrawPrimitive::Disc { .. } => 3,
            DrawPrimitive::Triangle { .. } => 4,
            DrawPrimitive::Present => 5,
        };
        let ranks: Vec<_> = frame.iter().map(kind_rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted, "frame not in z-order: {:?}", frame);
        assert!(ranks.contains(&1), "accuracy circle missing");
        assert!(ranks.contains(&2), "route line missing");
        assert!(ranks.contains(&3), "breadcrumbs missing");
        assert!(ranks.contains(&4), "heading arrow missing");
    }
}
