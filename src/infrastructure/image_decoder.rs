// SPDX-License-Identifier: MPL-2.0
//! `image` crate adapter implementing the [`MediaDecoder`] port trait.
//!
//! Used by the desktop binary, which has no media element to lean on. Still
//! images are fully decoded off the event loop; videos are reported as
//! undecodable since no video backend is bundled.
//!
//! [`MediaDecoder`]: crate::application::port::MediaDecoder

use crate::application::port::media::{DecoderError, ImageInfo, MediaDecoder};
use crate::domain::media::{RawImage, VideoMetadata};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use std::sync::Arc;

/// Decoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decodes an image synchronously.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or the data is corrupt.
    pub fn decode_blocking(bytes: &[u8]) -> Result<RawImage, DecoderError> {
        let image = image_rs::load_from_memory(bytes)
            .map_err(|err| DecoderError::new(err.to_string()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        RawImage::try_from_rgba(width, height, image.into_raw())
            .ok_or_else(|| DecoderError::new(format!("invalid dimensions: {width}x{height}")))
    }
}

impl MediaDecoder for ImageCrateDecoder {
    fn decode_image(&self, bytes: Arc<[u8]>) -> LocalBoxFuture<'static, Result<ImageInfo, DecoderError>> {
        async move {
            let image = tokio::task::spawn_blocking(move || Self::decode_blocking(&bytes))
                .await
                .map_err(|err| DecoderError::new(err.to_string()))??;
            Ok(ImageInfo {
                width: image.width(),
                height: image.height(),
            })
        }
        .boxed_local()
    }

    fn probe_video(&self, _bytes: Arc<[u8]>) -> LocalBoxFuture<'static, Result<VideoMetadata, DecoderError>> {
        futures_util::future::ready(Err(DecoderError::new("no video backend available"))).boxed_local()
    }

    fn capture_frame(
        &self,
        _bytes: Arc<[u8]>,
        _at_secs: f64,
    ) -> LocalBoxFuture<'static, Result<RawImage, DecoderError>> {
        futures_util::future::ready(Err(DecoderError::new("no video backend available"))).boxed_local()
    }
}
