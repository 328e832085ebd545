// SPDX-License-Identifier: MPL-2.0
//! Media ingestion and storage.
//!
//! Dropped files flow through the [`ingest`] pipeline into the [`store`];
//! video records get their strip image from [`thumbnail`].

pub mod ingest;
pub mod store;
pub mod thumbnail;

use std::path::Path;

pub use ingest::{
    DecodedBatch, DecodedItem, DroppedFile, IngestPipeline, PendingThumbnail, ResolvedThumbnail,
    ThumbnailBatch,
};
pub use store::{MediaStore, NewRecord};
pub use thumbnail::{render_video_thumbnail, ThumbnailError};

/// Supported file extensions for on-disk input.
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];

    /// All supported extensions (images + videos)
    #[must_use]
    pub fn all_supported_extensions() -> Vec<&'static str> {
        IMAGE_EXTENSIONS
            .iter()
            .chain(VIDEO_EXTENSIONS.iter())
            .copied()
            .collect()
    }
}

/// Media type declared for files read from disk, derived from the extension.
///
/// Mirrors what a browser reports for dropped files. Unknown extensions map to
/// `application/octet-stream`, which ingestion skips.
#[must_use]
pub fn mime_for_path<P: AsRef<Path>>(path: P) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("tiff" | "tif") => "image/tiff",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        Some("mp4") => "video/mp4",
        Some("m4v") => "video/x-m4v",
        Some("avi") => "video/x-msvideo",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}
