// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! Read-only views of the viewer state, rebuilt on demand from the
//! controller. The surface can use them instead of, or alongside, the effect
//! stream.
//!
//! # Available Services
//!
//! - [`navigation`]: Navigation info and the full [`ViewSnapshot`]

pub mod navigation;

// Re-export main types
pub use navigation::{NavigationInfo, ThumbnailView, ViewSnapshot};
