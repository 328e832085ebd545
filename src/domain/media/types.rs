// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::sync::Arc;

/// Kind of media a record holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Still image (JPEG, PNG, WebP, ...)
    Image,
    /// Video played by the presentation surface.
    Video,
}

impl MediaKind {
    /// Classifies a declared media type (`image/png`, `video/mp4`, ...).
    ///
    /// Only the top-level type prefix is considered; anything that is neither
    /// `image/` nor `video/` yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use lens_gallery::domain::media::MediaKind;
    ///
    /// assert_eq!(MediaKind::from_mime("image/jpeg"), Some(MediaKind::Image));
    /// assert_eq!(MediaKind::from_mime("Video/WebM"), Some(MediaKind::Video));
    /// assert_eq!(MediaKind::from_mime("application/pdf"), None);
    /// ```
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let (top_level, _) = mime.split_once('/')?;
        let top_level = top_level.trim();
        if top_level.eq_ignore_ascii_case("image") {
            Some(Self::Image)
        } else if top_level.eq_ignore_ascii_case("video") {
            Some(Self::Video)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Raw image data without presentation dependencies.
///
/// Used for decoded video frames before they are rasterized into a thumbnail.
///
/// # Example
///
/// ```
/// use lens_gallery::domain::media::RawImage;
/// use std::sync::Arc;
///
/// let pixels = vec![255u8; 100 * 100 * 4]; // 100x100 RGBA
/// let image = RawImage::new(100, 100, Arc::new(pixels));
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Fallible variant of [`RawImage::from_rgba`] for frames handed over by a host.
    #[must_use]
    pub fn try_from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        (rgba_bytes.len() == expected_len && width > 0 && height > 0)
            .then(|| Self::from_rgba(width, height, rgba_bytes))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

/// Video metadata reported by the decoder once `loadedmetadata` is known.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    /// Duration in seconds.
    pub duration_secs: f64,
}

impl VideoMetadata {
    #[must_use]
    pub fn new(width: u32, height: u32, duration_secs: f64) -> Self {
        Self {
            width,
            height,
            duration_secs,
        }
    }

    /// Position of the poster frame: `min(preferred, duration - margin)`, never negative.
    #[must_use]
    pub fn poster_position(&self, preferred_secs: f64, tail_margin_secs: f64) -> f64 {
        if !self.duration_secs.is_finite() {
            return preferred_secs.max(0.0);
        }
        preferred_secs
            .min(self.duration_secs - tail_margin_secs)
            .max(0.0)
    }
}

/// Opaque reference to the bytes of a dropped file.
///
/// Cloning is cheap; all clones share the same buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct MediaSource {
    bytes: Arc<[u8]>,
    mime: Arc<str>,
}

impl MediaSource {
    #[must_use]
    pub fn new(bytes: Arc<[u8]>, mime: impl Into<Arc<str>>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    /// Declared media type of the source.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSource")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Thumbnail shown in the strip for a record.
#[derive(Clone, PartialEq, Eq)]
pub enum ThumbnailHandle {
    /// The record's own source doubles as its thumbnail (images).
    Source,
    /// Encoded PNG generated from a video poster frame.
    Png(Arc<[u8]>),
}

impl fmt::Debug for ThumbnailHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("Source"),
            Self::Png(bytes) => write!(f, "Png({} bytes)", bytes.len()),
        }
    }
}

/// Stable identity of a record, independent of its position in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One ingested image or video with its thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRecord {
    pub id: RecordId,
    pub kind: MediaKind,
    pub source: MediaSource,
    pub display_name: String,
    pub thumbnail: Option<ThumbnailHandle>,
}

impl MediaRecord {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind.is_video()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_from_mime_uses_prefix() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("image/svg+xml"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_mime("audio/mpeg"), None);
        assert_eq!(MediaKind::from_mime("image"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn raw_image_creation() {
        let image = RawImage::from_rgba(10, 10, vec![0u8; 10 * 10 * 4]);
        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 10);
        assert_eq!(image.rgba_bytes().len(), 400);
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn raw_image_invalid_size() {
        let _ = RawImage::from_rgba(10, 10, vec![0u8; 100]);
    }

    #[test]
    fn raw_image_try_from_rejects_bad_length() {
        assert!(RawImage::try_from_rgba(2, 2, vec![0u8; 3]).is_none());
        assert!(RawImage::try_from_rgba(0, 0, Vec::new()).is_none());
        assert!(RawImage::try_from_rgba(2, 2, vec![0u8; 16]).is_some());
    }

    #[test]
    fn poster_position_prefers_one_second() {
        let long = VideoMetadata::new(640, 480, 12.0);
        assert!((long.poster_position(1.0, 0.1) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn poster_position_stays_inside_short_videos() {
        let short = VideoMetadata::new(640, 480, 0.5);
        assert!((short.poster_position(1.0, 0.1) - 0.4).abs() < 1e-9);

        let tiny = VideoMetadata::new(640, 480, 0.05);
        assert!(tiny.poster_position(1.0, 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn poster_position_handles_unknown_duration() {
        let live = VideoMetadata::new(640, 480, f64::INFINITY);
        assert!((live.poster_position(1.0, 0.1) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn media_source_debug_hides_bytes() {
        let source = MediaSource::new(Arc::from(vec![1u8, 2, 3]), "image/png");
        let debug = format!("{source:?}");
        assert!(debug.contains("len: 3"));
        assert_eq!(source.mime(), "image/png");
    }
}
