// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state holders driven by the viewer sub-components.

pub mod gesture;
pub mod transform;
pub mod viewport;

// Re-export commonly used types for convenience
pub use gesture::{GestureContext, GestureMode};
pub use transform::TransformState;
pub use viewport::ViewportState;
