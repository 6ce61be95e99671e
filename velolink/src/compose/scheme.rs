//! Built-in color schemes.

use crate::protocol::Rgb;
use crate::settings::SchemeKind;

/// The six semantic colors of one scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background.
    pub background: Rgb,
    /// Planned route segments.
    pub route: Rgb,
    /// Heading indicator at the rider anchor.
    pub position_indicator: Rgb,
    /// Breadcrumb trail of recent positions.
    pub recent_points: Rgb,
    /// GPS accuracy circle.
    pub accuracy_circle: Rgb,
    /// Helper line toward an off-screen route.
    pub helper_line: Rgb,
}

impl Palette {
    /// The built-in palette for a scheme.
    pub fn for_scheme(kind: SchemeKind) -> Self {
        match kind {
            SchemeKind::Dark => Self {
                background: Rgb::new(0, 0, 0),
                route: Rgb::new(200, 100, 0),
                position_indicator: Rgb::new(255, 255, 255),
                recent_points: Rgb::new(0, 255, 0),
                accuracy_circle: Rgb::new(70, 70, 70),
                helper_line: Rgb::new(100, 100, 100),
            },
            SchemeKind::Light => Self {
                background: Rgb::new(255, 255, 255),
                route: Rgb::new(60, 0, 160),
                position_indicator: Rgb::new(255, 98, 22),
                recent_points: Rgb::new(0, 255, 0),
                accuracy_circle: Rgb::new(150, 150, 150),
                helper_line: Rgb::new(100, 100, 100),
            },
        }
    }
}
