//! Display settings and target-display capabilities.
//!
//! The core reads these per composition; it does not own persistence or
//! change notification. Every field has a documented default so a missing
//! upstream value degrades to something sensible instead of erroring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default zoom scale in meters per pixel.
pub const DEFAULT_METERS_PER_PIXEL: f64 = 1.5;

/// Default stroke-width multiplier.
pub const DEFAULT_LINE_WIDTH_SCALE: f64 = 2.0;

/// Default display width in pixels, used when capabilities are unknown.
pub const DEFAULT_DISPLAY_WIDTH: u16 = 128;

/// Default display height in pixels, used when capabilities are unknown.
pub const DEFAULT_DISPLAY_HEIGHT: u16 = 128;

/// Horizontal accuracy assumed for a good simulated fix, in meters.
pub const SIMULATED_ACCURACY_GOOD_M: f64 = 5.0;

/// Horizontal accuracy assumed for a bad simulated fix, in meters.
pub const SIMULATED_ACCURACY_BAD_M: f64 = 40.0;

/// Where the projection center comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// Follow the rider's real GPS fix.
    #[default]
    Real,
    /// Follow a caller-supplied fallback point (e.g. a map crosshair).
    MapViewCenter,
}

/// Which angle rotates the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpSource {
    /// No rotation; geographic north stays up.
    NorthUp,
    /// The device-reported course.
    SystemCourseUp,
    /// The course computed from position history.
    #[default]
    CustomCourseUp,
    /// The device-reported compass heading.
    HeadingUp,
}

/// Which built-in color scheme to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    #[default]
    Dark,
    Light,
}

/// Accuracy assumed when no real fix exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedAccuracy {
    #[default]
    Good,
    Bad,
}

impl SimulatedAccuracy {
    /// The horizontal accuracy this variant stands in for, in meters.
    pub fn accuracy_meters(self) -> f64 {
        match self {
            SimulatedAccuracy::Good => SIMULATED_ACCURACY_GOOD_M,
            SimulatedAccuracy::Bad => SIMULATED_ACCURACY_BAD_M,
        }
    }
}

/// Rejected settings values.
///
/// The composer itself never validates; surfaces that accept user input
/// (config files, CLI flags) call [`DisplaySettings::validate`] before
/// handing settings to a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("meters per pixel must be positive, got {0}")]
    NonPositiveScale(f64),
    #[error("line width scale must be positive, got {0}")]
    NonPositiveLineWidth(f64),
}

/// Per-composition rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Zoom scale: meters of ground per device pixel.
    pub meters_per_pixel: f64,
    /// Multiplier for stroke widths and indicator sizes.
    pub line_width_scale: f64,
    /// Rotation source.
    pub up_source: UpSource,
    /// Active color scheme.
    pub color_scheme: SchemeKind,
    /// Projection-center source.
    pub position_source: PositionSource,
    /// Accuracy assumed when no real fix exists.
    pub simulated_accuracy: SimulatedAccuracy,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
            line_width_scale: DEFAULT_LINE_WIDTH_SCALE,
            up_source: UpSource::default(),
            color_scheme: SchemeKind::default(),
            position_source: PositionSource::default(),
            simulated_accuracy: SimulatedAccuracy::default(),
        }
    }
}

impl DisplaySettings {
    /// Check numeric fields for values the pipeline cannot render with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.meters_per_pixel.is_finite() || self.meters_per_pixel <= 0.0 {
            return Err(SettingsError::NonPositiveScale(self.meters_per_pixel));
        }
        if !self.line_width_scale.is_finite() || self.line_width_scale <= 0.0 {
            return Err(SettingsError::NonPositiveLineWidth(self.line_width_scale));
        }
        Ok(())
    }
}

/// Pixel dimensions of the target display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub width: u16,
    pub height: u16,
}

impl Default for DisplayInfo {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

impl DisplayInfo {
    /// Create display info for a known panel size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}
