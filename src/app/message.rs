// SPDX-License-Identifier: MPL-2.0
//! Top-level messages consumed by the application event loop.

use crate::media::ingest::{DecodedBatch, DroppedFile, ThumbnailBatch};
use crate::ui::viewer::component;

/// Top-level messages consumed by `App::run`. The variants forward viewer
/// messages and carry ingestion results back onto the loop, keeping a single
/// update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Surface input or a fired timer.
    Viewer(component::Message),
    /// The user dropped files onto the surface.
    FilesDropped(Vec<DroppedFile>),
    /// Decode phase of a batch finished.
    BatchDecoded(DecodedBatch),
    /// Thumbnail phase of a batch finished.
    ThumbnailsResolved(ThumbnailBatch),
    /// Stop the event loop.
    Shutdown,
}

impl From<component::Message> for Message {
    fn from(msg: component::Message) -> Self {
        Self::Viewer(msg)
    }
}
