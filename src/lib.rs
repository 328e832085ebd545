// SPDX-License-Identifier: MPL-2.0
//! `lens_gallery` is the core of a drop-to-view media gallery.
//!
//! Dropped image and video files are ingested in drop order, shown one at a
//! time with a thumbnail strip, played as a slideshow that waits for videos to
//! finish, and zoomed or panned with wheel, drag and pinch gestures. Rendering
//! is left to a presentation surface that feeds messages in and applies the
//! effects that come back.

#![doc(html_root_url = "https://docs.rs/lens_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
