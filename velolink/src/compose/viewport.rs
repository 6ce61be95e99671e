//! Screen anchor placement.

use crate::geo::ScreenPoint;
use crate::settings::DisplayInfo;

/// Aspect ratio (height/width) above which a display counts as tall.
const TALL_ASPECT_THRESHOLD: f64 = 1.3;

/// Vertical anchor position on tall displays, as a fraction of height.
const TALL_ANCHOR_FRACTION: f64 = 0.67;

/// Anchor distance from the bottom on near-square displays, as a fraction
/// of the smaller dimension.
const SQUARE_ANCHOR_FRACTION: f64 = 0.45;

/// The device-pixel point representing the rider on this display.
///
/// Tall displays put the anchor at 67% of the height; near-square displays
/// pull it up from the bottom edge by 45% of the smaller dimension. Both
/// keep most of the screen ahead of the rider.
pub fn anchor_for_display(display: DisplayInfo) -> ScreenPoint {
    let width = f64::from(display.width);
    let height = f64::from(display.height);
    let y = if height / width > TALL_ASPECT_THRESHOLD {
        height * TALL_ANCHOR_FRACTION
    } else {
        height - width.min(height) * SQUARE_ANCHOR_FRACTION
    };
    ScreenPoint::new(width / 2.0, y)
}
