// SPDX-License-Identifier: MPL-2.0
//! Media decoding port definition.
//!
//! This module defines the [`MediaDecoder`] trait the ingestion pipeline uses
//! to validate images, probe videos and capture poster frames. The browser
//! build backs it with the host's media elements; the desktop binary uses the
//! `image` crate adapter in [`crate::infrastructure`].

use crate::domain::media::{RawImage, VideoMetadata};
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;
use thiserror::Error;

/// Reason a decoder primitive failed.
///
/// The pipeline attaches the file name and turns this into a
/// [`MediaError`](crate::domain::error::MediaError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DecoderError(pub String);

impl DecoderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Dimensions of a successfully decoded still image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Asynchronous decoding primitives supplied by the host.
///
/// Futures are not required to be `Send`: the viewer runs on a single-threaded
/// event loop and host decoders are usually tied to it.
pub trait MediaDecoder {
    /// Decodes an image far enough to know it is displayable.
    fn decode_image(&self, bytes: Arc<[u8]>) -> LocalBoxFuture<'static, Result<ImageInfo, DecoderError>>;

    /// Loads video metadata (dimensions and duration).
    fn probe_video(
        &self,
        bytes: Arc<[u8]>,
    ) -> LocalBoxFuture<'static, Result<VideoMetadata, DecoderError>>;

    /// Seeks to `at_secs` and captures the frame shown there.
    fn capture_frame(
        &self,
        bytes: Arc<[u8]>,
        at_secs: f64,
    ) -> LocalBoxFuture<'static, Result<RawImage, DecoderError>>;
}

impl<D: MediaDecoder + ?Sized> MediaDecoder for Arc<D> {
    fn decode_image(&self, bytes: Arc<[u8]>) -> LocalBoxFuture<'static, Result<ImageInfo, DecoderError>> {
        (**self).decode_image(bytes)
    }

    fn probe_video(
        &self,
        bytes: Arc<[u8]>,
    ) -> LocalBoxFuture<'static, Result<VideoMetadata, DecoderError>> {
        (**self).probe_video(bytes)
    }

    fn capture_frame(
        &self,
        bytes: Arc<[u8]>,
        at_secs: f64,
    ) -> LocalBoxFuture<'static, Result<RawImage, DecoderError>> {
        (**self).capture_frame(bytes, at_secs)
    }
}
