// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! Per-item media failures. None of them is fatal: ingestion isolates them
//! per file and playback reports them for diagnostics only.

use std::fmt;

/// Failure attached to a single media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Dropped file is neither an image nor a video; skipped silently.
    UnsupportedMediaType {
        /// Name of the skipped file.
        name: String,
        /// Declared media type.
        mime: String,
    },

    /// File could not be read or decoded; the item is left out of its batch.
    DecodeFailure {
        name: String,
        reason: String,
    },

    /// Poster frame could not be captured or drawn; the record is kept
    /// without a thumbnail.
    ThumbnailGenerationFailure {
        name: String,
        reason: String,
    },

    /// The presentation surface reported a playback error.
    VideoPlaybackError(String),
}

impl MediaError {
    /// Name of the file the failure belongs to, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            MediaError::UnsupportedMediaType { name, .. }
            | MediaError::DecodeFailure { name, .. }
            | MediaError::ThumbnailGenerationFailure { name, .. } => Some(name),
            MediaError::VideoPlaybackError(_) => None,
        }
    }

    /// Whether the failing item still ends up in the store.
    #[must_use]
    pub fn keeps_record(&self) -> bool {
        matches!(self, MediaError::ThumbnailGenerationFailure { .. })
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::UnsupportedMediaType { name, mime } => {
                write!(f, "Unsupported media type '{mime}' for {name}")
            }
            MediaError::DecodeFailure { name, reason } => {
                write!(f, "Failed to decode {name}: {reason}")
            }
            MediaError::ThumbnailGenerationFailure { name, reason } => {
                write!(f, "Failed to generate thumbnail for {name}: {reason}")
            }
            MediaError::VideoPlaybackError(msg) => write!(f, "Video playback error: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_file_name() {
        let err = MediaError::DecodeFailure {
            name: "cat.png".to_string(),
            reason: "truncated".to_string(),
        };
        assert_eq!(format!("{err}"), "Failed to decode cat.png: truncated");
        assert_eq!(err.file_name(), Some("cat.png"));
    }

    #[test]
    fn only_thumbnail_failures_keep_the_record() {
        let thumb = MediaError::ThumbnailGenerationFailure {
            name: "clip.mp4".into(),
            reason: "seek".into(),
        };
        let decode = MediaError::DecodeFailure {
            name: "clip.mp4".into(),
            reason: "probe".into(),
        };
        assert!(thumb.keeps_record());
        assert!(!decode.keeps_record());
        assert!(!MediaError::VideoPlaybackError("boom".into()).keeps_record());
    }

    #[test]
    fn playback_error_has_no_file_name() {
        assert!(MediaError::VideoPlaybackError("x".into()).file_name().is_none());
    }
}
