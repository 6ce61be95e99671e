//! Frame composition.
//!
//! Turns the current route, rider state and settings into the ordered
//! primitive list for one frame: background, accuracy circle, route (or a
//! helper line pointing toward an off-screen route), breadcrumb trail,
//! heading indicator, present. Later primitives draw over earlier ones,
//! so the emit order here is the z-order on the glass.

mod composer;
mod scheme;
mod viewport;

pub use composer::{FrameComposer, RiderState};
pub use scheme::Palette;
pub use viewport::anchor_for_display;
