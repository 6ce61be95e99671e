//! VeloLink - remote bike-navigation display pipeline
//!
//! This library drives a small low-power display over a slow wireless
//! link while cycling. It turns location and heading events into compact
//! binary drawing commands: a rotated, rider-centered map projection, a
//! smoothed course estimate, a bounded primitive list per frame, and a
//! coalescing scheduler that keeps at most one frame in flight per
//! rate-limit window.
//!
//! The transport itself (BLE or otherwise) is not part of this crate;
//! implement [`session::FrameSink`] and hand it to a
//! [`session::DisplaySession`].

pub mod compose;
pub mod course;
pub mod geo;
pub mod protocol;
pub mod scheduler;
pub mod session;
pub mod settings;

pub use compose::{FrameComposer, Palette, RiderState};
pub use course::{CourseEstimator, LocationSample};
pub use geo::{GeoPoint, GeometryConverter};
pub use protocol::{encode_frame, DrawPrimitive, PixelPoint, Rgb};
pub use scheduler::{CoalescingScheduler, TaskOutcome, DEFAULT_COOL_DOWN};
pub use session::{DisplaySession, FrameSink, SessionConfig};
pub use settings::{DisplayInfo, DisplaySettings, SchemeKind, UpSource};

/// Crate version, for banners and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
