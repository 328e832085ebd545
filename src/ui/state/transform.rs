// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan transform state
//!
//! The surface applies the transform as `scale(s) translate(t)` about the
//! viewport center `C`, so a content point `p` lands on screen at
//! `C + s * (p - C + t)`.

use crate::domain::ui::{Point, Vector, ZoomScale};

/// Scale and translation of the displayed still image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    /// Current scale, always within 1.0–3.0.
    pub scale: ZoomScale,
    /// Translation in content units (applied before scaling).
    pub translate: Vector,
}

impl TransformState {
    /// Unzoomed, untranslated transform.
    pub const IDENTITY: Self = Self {
        scale: ZoomScale::IDENTITY,
        translate: Vector::ZERO,
    };

    /// Returns to identity.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Whether the image is magnified beyond its fitted size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.scale.is_min()
    }

    /// Changes the scale while keeping the content under `focal` in place.
    ///
    /// Reaching the minimum scale snaps back to identity.
    pub fn zoom_at(&mut self, scale: ZoomScale, focal: Point, center: Point) {
        if scale.is_min() {
            self.reset();
            return;
        }
        let previous = self.scale.value();
        let next = scale.value();
        let anchor = focal - center;
        self.translate = self.translate + anchor * (1.0 / next - 1.0 / previous);
        self.scale = scale;
    }

    /// Pans by a screen-space displacement.
    ///
    /// The displacement is divided by the scale so the content tracks the
    /// contact exactly.
    pub fn pan_by(&mut self, delta: Vector) {
        self.translate = self.translate + delta * (1.0 / self.scale.value());
    }

    /// Screen-space offset of the content, `s * t`.
    #[must_use]
    pub fn screen_offset(&self) -> Vector {
        self.translate * self.scale.value()
    }

    /// Content point currently displayed at `screen`.
    #[must_use]
    pub fn content_point_at(&self, screen: Point, center: Point) -> Point {
        let s = self.scale.value();
        let from_center = screen - center;
        center + (from_center * (1.0 / s) + self.translate * -1.0)
    }
}
