// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the size of the surface area the media is displayed in, which
//! anchors zoom-to-point math at its center.

use crate::domain::ui::{Point, Size};

/// Manages the viewport size
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportState {
    /// Current viewport size, unknown until the surface reports it
    pub size: Option<Size>,

    /// Previous viewport size (for layout change detection)
    pub previous_size: Option<Size>,
}

impl ViewportState {
    /// Updates the viewport size.
    /// Returns true if the size actually changed.
    pub fn update(&mut self, size: Size) -> bool {
        self.previous_size = self.size;
        self.size = Some(size);
        self.previous_size != self.size
    }

    /// Center of the viewport.
    ///
    /// Before the first report the origin is used, which anchors zoom at the
    /// top-left corner.
    #[must_use]
    pub fn center(&self) -> Point {
        self.size.map_or(Point::ORIGIN, Size::center)
    }
}
