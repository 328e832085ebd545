// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`media`]: Image decoding, video probing and frame capture
//!
//! # Design Notes
//!
//! - All traits use domain types only (no host or `image` crate types)
//! - Futures are local (`!Send`): the viewer runs on a single-threaded loop
//! - Methods fail with [`DecoderError`]; the pipeline adds the file context
//!
//! # Example
//!
//! ```ignore
//! use lens_gallery::application::port::MediaDecoder;
//! use std::sync::Arc;
//!
//! async fn is_displayable(decoder: &impl MediaDecoder, bytes: Arc<[u8]>) -> bool {
//!     decoder.decode_image(bytes).await.is_ok()
//! }
//! ```

pub mod media;

// Re-export main types for convenience
pub use media::{DecoderError, ImageInfo, MediaDecoder};
