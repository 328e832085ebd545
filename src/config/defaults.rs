// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the gallery. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Auto-advance slot duration
//! - **Chrome**: Thumbnail strip / navigation controls auto-hide
//! - **Zoom**: Scale bounds and wheel step
//! - **Gestures**: Swipe and tap thresholds
//! - **Thumbnails**: Video poster frame and play glyph geometry

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default time each slide stays on screen before auto-advancing (ms).
pub const DEFAULT_SLIDE_DURATION_MS: u64 = 5000;

/// Minimum slide duration (ms).
pub const MIN_SLIDE_DURATION_MS: u64 = 500;

/// Maximum slide duration (ms).
pub const MAX_SLIDE_DURATION_MS: u64 = 600_000;

/// Minimum number of records required to start a slideshow.
pub const MIN_SLIDESHOW_RECORDS: usize = 2;

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Default delay before chrome hides after the pointer leaves or idles (ms).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;

/// Minimum chrome hide delay (ms).
pub const MIN_HIDE_DELAY_MS: u64 = 100;

/// Maximum chrome hide delay (ms).
pub const MAX_HIDE_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Unzoomed scale.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Maximum scale reachable by wheel or pinch.
pub const MAX_ZOOM_SCALE: f32 = 3.0;

/// Scale change per wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Scales this close to the minimum count as unzoomed.
pub const ZOOM_SNAP_EPSILON: f32 = 1e-3;

/// Pinch samples whose baseline distance is below this are ignored (px).
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default horizontal travel needed to trigger a swipe navigation (px).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold (px).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold (px).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Maximum travel for a contact to still count as a tap (px).
pub const TAP_SLOP_PX: f32 = 8.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default edge length of generated square video thumbnails (px).
pub const DEFAULT_THUMBNAIL_EDGE_PX: u32 = 160;

/// Minimum thumbnail edge (px).
pub const MIN_THUMBNAIL_EDGE_PX: u32 = 32;

/// Maximum thumbnail edge (px).
pub const MAX_THUMBNAIL_EDGE_PX: u32 = 1024;

/// Preferred seek position for the video poster frame (seconds).
pub const POSTER_SEEK_SECS: f64 = 1.0;

/// Distance kept from the end of short videos when seeking (seconds).
pub const POSTER_TAIL_MARGIN_SECS: f64 = 0.1;

/// Delay before the single retry of a failed poster frame capture (ms).
pub const SEEK_RETRY_DELAY_MS: u64 = 100;

/// Play glyph circle radius as a fraction of the thumbnail edge.
pub const PLAY_GLYPH_RADIUS_RATIO: f32 = 0.2;

/// Play glyph triangle half-height as a fraction of the thumbnail edge.
pub const PLAY_GLYPH_TRIANGLE_RATIO: f32 = 0.09;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDE_DURATION_MS > 0);
    assert!(DEFAULT_SLIDE_DURATION_MS >= MIN_SLIDE_DURATION_MS);
    assert!(DEFAULT_SLIDE_DURATION_MS <= MAX_SLIDE_DURATION_MS);
    assert!(MIN_SLIDESHOW_RECORDS >= 2);

    assert!(MIN_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_HIDE_DELAY_MS >= MIN_HIDE_DELAY_MS);
    assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);

    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(ZOOM_SNAP_EPSILON < WHEEL_ZOOM_STEP);

    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(TAP_SLOP_PX < MIN_SWIPE_THRESHOLD_PX);

    assert!(DEFAULT_THUMBNAIL_EDGE_PX >= MIN_THUMBNAIL_EDGE_PX);
    assert!(DEFAULT_THUMBNAIL_EDGE_PX <= MAX_THUMBNAIL_EDGE_PX);
    assert!(POSTER_TAIL_MARGIN_SECS < POSTER_SEEK_SECS);
    assert!(PLAY_GLYPH_RADIUS_RATIO < 0.5);
    assert!(PLAY_GLYPH_TRIANGLE_RATIO < PLAY_GLYPH_RADIUS_RATIO);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slideshow_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDE_DURATION_MS, 5000);
        assert!(DEFAULT_SLIDE_DURATION_MS >= MIN_SLIDE_DURATION_MS);
    }

    #[test]
    fn chrome_defaults_are_valid() {
        assert_eq!(DEFAULT_HIDE_DELAY_MS, 1000);
        assert!(DEFAULT_HIDE_DELAY_MS <= MAX_HIDE_DELAY_MS);
    }

    #[test]
    fn zoom_range_is_one_to_three() {
        assert_eq!(MIN_ZOOM_SCALE, 1.0);
        assert_eq!(MAX_ZOOM_SCALE, 3.0);
    }

    #[test]
    fn swipe_threshold_default_matches_fifty_pixels() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
    }

    #[test]
    fn tap_slop_is_below_every_swipe_threshold() {
        let (slop, min_swipe) = (TAP_SLOP_PX, MIN_SWIPE_THRESHOLD_PX);
        assert!(slop < min_swipe);
    }
}
