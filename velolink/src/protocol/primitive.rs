//! Drawing primitives and wire-range pixel coordinates.

use super::Rgb;

/// Smallest pixel coordinate representable on the wire.
pub const MIN_PIXEL_COORD: i16 = -32767;

/// Largest pixel coordinate representable on the wire.
pub const MAX_PIXEL_COORD: i16 = 32766;

/// A pixel position in the display's signed 16-bit coordinate space.
///
/// Out-of-range values are saturated, never wrapped: geometry that projects
/// far off-screen still encodes to a valid (clamped) command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i16,
    pub y: i16,
}

impl PixelPoint {
    /// Create a pixel point from in-range coordinates.
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Saturate floating-point pixel coordinates into wire range.
    pub fn saturating(x: f64, y: f64) -> Self {
        let clamp = |v: f64| v.clamp(f64::from(MIN_PIXEL_COORD), f64::from(MAX_PIXEL_COORD)) as i16;
        Self {
            x: clamp(x),
            y: clamp(y),
        }
    }
}

/// One drawing command for the remote display.
///
/// A frame is an ordered `Vec<DrawPrimitive>` starting with [`Clear`] and
/// ending with [`Present`]; later primitives draw over earlier ones.
///
/// [`Clear`]: DrawPrimitive::Clear
/// [`Present`]: DrawPrimitive::Present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPrimitive {
    /// Begin a new frame, clearing the back buffer to a color.
    Clear(Rgb),
    /// A straight line with the given stroke width.
    Line {
        from: PixelPoint,
        to: PixelPoint,
        color: Rgb,
        width: u8,
    },
    /// A circle outline.
    Circle {
        center: PixelPoint,
        radius: u8,
        color: Rgb,
    },
    /// A filled circle.
    Disc {
        center: PixelPoint,
        radius: u8,
        color: Rgb,
    },
    /// A filled triangle.
    Triangle {
        p1: PixelPoint,
        p2: PixelPoint,
        p3: PixelPoint,
        color: Rgb,
    },
    /// Flip the back buffer onto the screen.
    Present,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_in_range_passthrough() {
        let p = PixelPoint::saturating(64.4, -120.6);
        assert_eq!(p, PixelPoint::new(64, -120));
    }

    #[test]
    fn test_saturating_clamps_to_wire_bounds() {
        let p = PixelPoint::saturating(1e9, -1e9);
        assert_eq!(p, PixelPoint::new(MAX_PIXEL_COORD, MIN_PIXEL_COORD));
    }

    #[test]
    fn test_saturating_exact_bounds() {
        let p = PixelPoint::saturating(32766.0, -32767.0);
        assert_eq!(p, PixelPoint::new(32766, -32767));
        let q = PixelPoint::saturating(32767.0, -32768.0);
        assert_eq!(q, PixelPoint::new(32766, -32767));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_saturating_always_in_wire_range(
                x in -1e12..1e12_f64,
                y in -1e12..1e12_f64
            ) {
                let p = PixelPoint::saturating(x, y);
                prop_assert!(p.x >= MIN_PIXEL_COORD && p.x <= MAX_PIXEL_COORD);
                prop_assert!(p.y >= MIN_PIXEL_COORD && p.y <= MAX_PIXEL_COORD);
            }
        }
    }
}
