// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Current index, slideshow and video-aware advance
//!     ├── zoom       - Encapsulates TransformState
//!     ├── gesture    - Swipe / drag / pinch / tap / wheel classification
//!     └── overlay    - Chrome visibility timer
//! ```

pub mod gesture;
pub mod navigation;
pub mod overlay;
pub mod zoom;
