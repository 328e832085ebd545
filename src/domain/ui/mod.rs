// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod geometry;
pub mod newtypes;

// Re-export commonly used types
pub use geometry::{Point, Size, Vector};
pub use newtypes::{HideDelay, SlideDuration, SwipeThreshold, ThumbnailEdge, ZoomScale};
