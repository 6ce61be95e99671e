//! Course estimation from recent position history.
//!
//! GPS fixes are noisy; the instantaneous bearing between consecutive
//! samples swings wildly at cycling speed. [`CourseEstimator`] keeps a
//! bounded history of recent positions and derives a smoothed forward
//! direction by extrapolating a recency-weighted "imagined target" ahead
//! of the rider, then taking the great-circle bearing to it.
//!
//! # Design
//!
//! - History holds at most 21 samples, oldest evicted first.
//! - Samples closer than 5 m to the last retained sample are ignored, so
//!   jitter around a standstill cannot flood the history with
//!   near-duplicates.
//! - The single most recent retained sample is skipped when computing the
//!   course; it is usually too close to the current position to give a
//!   stable bearing.
//! - Poor reported accuracy damps the recency weighting, so an unreliable
//!   fix pulls the estimate toward the longer-term trend.

mod estimator;

pub use estimator::{CourseEstimator, LocationSample, HISTORY_CAPACITY, MIN_SAMPLE_SPACING_M};
