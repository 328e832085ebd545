// SPDX-License-Identifier: MPL-2.0
//! Gesture scratch state
//!
//! Per-interaction bookkeeping for the gesture router. Everything here is
//! discarded when the last contact ends.

use crate::domain::ui::Point;

/// What the current contacts are doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureMode {
    /// No contact is down.
    #[default]
    Idle,
    /// One contact on an unzoomed image; navigates once travel exceeds the threshold.
    Swipe {
        start_x: f32,
        /// Cleared after the swipe fires, or when the swipe began as a pinch.
        armed: bool,
    },
    /// One contact on a zoomed image; pans.
    Drag { last: Point },
    /// Two contacts; scales about their midpoint.
    Pinch { last_distance: f32 },
}

/// Scratch for one interaction, from first contact down to last contact up.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureContext {
    pub mode: GestureMode,
    /// Where the first contact went down.
    pub origin: Option<Point>,
    /// Largest distance any single-contact sample strayed from `origin`.
    pub max_travel: f32,
    /// Set once a second contact joined; such interactions are never taps.
    pub multi_contact: bool,
    /// Set once a drag moved the image; such interactions are never taps.
    pub panned: bool,
}

impl GestureContext {
    /// Starts tracking an interaction.
    pub fn begin(&mut self, mode: GestureMode, origin: Point) {
        *self = Self {
            mode,
            origin: Some(origin),
            max_travel: 0.0,
            multi_contact: matches!(mode, GestureMode::Pinch { .. }),
            panned: false,
        };
    }

    /// Records a single-contact sample for tap detection.
    pub fn track(&mut self, position: Point) {
        if let Some(origin) = self.origin {
            self.max_travel = self.max_travel.max(origin.distance(position));
        }
    }

    /// Whether the interaction still qualifies as a tap.
    #[must_use]
    pub fn is_tap(&self, slop: f32) -> bool {
        self.origin.is_some() && !self.multi_contact && !self.panned && self.max_travel < slop
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.mode, GestureMode::Idle)
    }

    /// Drops all scratch.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_idle() {
        let context = GestureContext::default();
        assert!(!context.is_active());
        assert!(!context.is_tap(10.0));
    }

    #[test]
    fn begin_and_clear() {
        let mut context = GestureContext::default();
        context.begin(GestureMode::Drag { last: Point::new(1.0, 2.0) }, Point::new(1.0, 2.0));
        assert!(context.is_active());
        context.clear();
        assert!(!context.is_active());
        assert!(context.origin.is_none());
    }

    #[test]
    fn travel_beyond_slop_is_not_a_tap() {
        let mut context = GestureContext::default();
        context.begin(GestureMode::Swipe { start_x: 0.0, armed: true }, Point::ORIGIN);
        context.track(Point::new(3.0, 4.0));
        assert!(context.is_tap(10.0));
        context.track(Point::new(30.0, 0.0));
        context.track(Point::new(1.0, 0.0));
        assert!(!context.is_tap(10.0));
    }

    #[test]
    fn panned_contact_is_not_a_tap() {
        let mut context = GestureContext::default();
        context.begin(GestureMode::Drag { last: Point::ORIGIN }, Point::ORIGIN);
        context.track(Point::new(2.0, 0.0));
        assert!(context.is_tap(10.0));
        context.panned = true;
        assert!(!context.is_tap(10.0));
    }

    #[test]
    fn pinch_is_never_a_tap() {
        let mut context = GestureContext::default();
        context.begin(GestureMode::Pinch { last_distance: 40.0 }, Point::ORIGIN);
        assert!(!context.is_tap(10.0));
    }
}
