// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`image_decoder`]: Still image decoding via the `image` crate (implements [`MediaDecoder`])
//!
//! [`MediaDecoder`]: crate::application::port::MediaDecoder

pub mod image_decoder;

pub use image_decoder::ImageCrateDecoder;
