// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_HIDE_DELAY_MS, DEFAULT_SLIDE_DURATION_MS, DEFAULT_SWIPE_THRESHOLD_PX,
    DEFAULT_THUMBNAIL_EDGE_PX, MAX_HIDE_DELAY_MS, MAX_SLIDE_DURATION_MS, MAX_SWIPE_THRESHOLD_PX,
    MAX_THUMBNAIL_EDGE_PX, MAX_ZOOM_SCALE, MIN_HIDE_DELAY_MS, MIN_SLIDE_DURATION_MS,
    MIN_SWIPE_THRESHOLD_PX, MIN_THUMBNAIL_EDGE_PX, MIN_ZOOM_SCALE, ZOOM_SNAP_EPSILON,
};
use std::time::Duration;

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom scale factor, guaranteed to be within the valid range (1.0–3.0).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Unzoomed scale.
    pub const IDENTITY: Self = Self(MIN_ZOOM_SCALE);

    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// NaN collapses to the identity scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::IDENTITY;
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    /// Moves to `target`. When zooming out, a result within
    /// [`ZOOM_SNAP_EPSILON`] of the minimum lands on identity exactly.
    fn toward(self, target: f32) -> Self {
        let next = Self::new(target);
        if next.0 < self.0 && next.0 - MIN_ZOOM_SCALE < ZOOM_SNAP_EPSILON {
            Self::IDENTITY
        } else {
            next
        }
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the unzoomed minimum.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    /// Returns whether the scale is at the maximum.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Adds a step to the scale (negative steps zoom out).
    #[must_use]
    pub fn offset_by(self, step: f32) -> Self {
        self.toward(self.0 + step)
    }

    /// Multiplies the scale by a factor.
    #[must_use]
    pub fn multiplied_by(self, factor: f32) -> Self {
        self.toward(self.0 * factor)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// SlideDuration
// =============================================================================

/// Time each slide stays on screen during a slideshow.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5 s – 10 min).
///
/// # Example
///
/// ```
/// use lens_gallery::domain::ui::SlideDuration;
///
/// let duration = SlideDuration::from_millis(5000);
/// assert_eq!(duration.as_millis(), 5000);
///
/// // Values outside range are clamped
/// let too_short = SlideDuration::from_millis(10);
/// assert_eq!(too_short.as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlideDuration(u64);

impl SlideDuration {
    /// Creates a new slide duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_DURATION_MS, MAX_SLIDE_DURATION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the slide duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideDuration {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_DURATION_MS)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Delay before the chrome (thumbnail strip, navigation buttons) fades out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_HIDE_DELAY_MS, MAX_HIDE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(DEFAULT_HIDE_DELAY_MS)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal travel (px) a single contact needs before it navigates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// ThumbnailEdge
// =============================================================================

/// Edge length of generated square thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailEdge(u32);

impl ThumbnailEdge {
    /// Creates a new edge length, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(MIN_THUMBNAIL_EDGE_PX, MAX_THUMBNAIL_EDGE_PX))
    }

    /// Returns the edge length in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ThumbnailEdge {
    fn default() -> Self {
        Self(DEFAULT_THUMBNAIL_EDGE_PX)
    }
}

// =============================================================================
// Tests
// =============================================================================
