// SPDX-License-Identifier: MPL-2.0
//! Ingestion pipeline: dropped files to ordered records with thumbnails.
//!
//! A batch runs in two phases. [`IngestPipeline::decode_batch`] classifies and
//! decodes every file concurrently, then sorts the survivors back into drop
//! order; the caller appends them to the store in one step. Once the records
//! are visible, [`IngestPipeline::resolve_thumbnails`] fills in their strip
//! images.
//!
//! Failures stay per item. An unsupported or undecodable file is left out of
//! its batch, and a video whose poster frame cannot be captured keeps an
//! absent thumbnail. Nothing is returned as an error to the caller.

use crate::application::port::media::{DecoderError, MediaDecoder};
use crate::config::defaults::{POSTER_SEEK_SECS, POSTER_TAIL_MARGIN_SECS};
use crate::config::ViewerSettings;
use crate::domain::error::MediaError;
use crate::domain::media::{
    MediaKind, MediaRecord, MediaSource, RawImage, RecordId, ThumbnailHandle, VideoMetadata,
};
use crate::domain::ui::ThumbnailEdge;
use crate::media::store::NewRecord;
use crate::media::thumbnail::render_video_thumbnail;
use futures_util::future::{join_all, LocalBoxFuture};
use futures_util::stream::FuturesUnordered;
use futures_util::{FutureExt, StreamExt};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// A file handed over by the presentation surface.
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, declaring its media type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: &Path) -> crate::error::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, super::mime_for_path(path), bytes))
    }
}

/// A decoded file, tagged with its position in the dropped batch.
#[derive(Debug, Clone)]
pub struct DecodedItem {
    pub position: usize,
    pub record: NewRecord,
    /// Probe result for videos.
    pub video: Option<VideoMetadata>,
}

/// Outcome of the decode phase, in drop order.
#[derive(Debug, Clone, Default)]
pub struct DecodedBatch {
    pub items: Vec<DecodedItem>,
    /// Files left out of the batch (unsupported or undecodable).
    pub failures: Vec<MediaError>,
}

impl DecodedBatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Thumbnail work for a record that is already in the store.
#[derive(Debug, Clone)]
pub struct PendingThumbnail {
    pub id: RecordId,
    pub name: String,
    pub kind: MediaKind,
    pub source: MediaSource,
    pub video: Option<VideoMetadata>,
}

impl PendingThumbnail {
    /// Builds the pending work for a freshly appended record.
    #[must_use]
    pub fn for_record(record: &MediaRecord, video: Option<VideoMetadata>) -> Self {
        Self {
            id: record.id,
            name: record.display_name.clone(),
            kind: record.kind,
            source: record.source.clone(),
            video,
        }
    }
}

/// Thumbnail outcome for one record; `None` leaves the thumbnail absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedThumbnail {
    pub id: RecordId,
    pub thumbnail: Option<ThumbnailHandle>,
}

/// Outcome of the thumbnail phase.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailBatch {
    pub resolved: Vec<ResolvedThumbnail>,
    pub failures: Vec<MediaError>,
}

/// Turns dropped files into store-ready records using a host decoder.
pub struct IngestPipeline<D> {
    decoder: Rc<D>,
    thumbnail_edge: ThumbnailEdge,
    seek_retry_delay: Duration,
}

impl<D> Clone for IngestPipeline<D> {
    fn clone(&self) -> Self {
        Self {
            decoder: Rc::clone(&self.decoder),
            thumbnail_edge: self.thumbnail_edge,
            seek_retry_delay: self.seek_retry_delay,
        }
    }
}

impl<D: MediaDecoder + 'static> IngestPipeline<D> {
    pub fn new(decoder: D, settings: &ViewerSettings) -> Self {
        Self {
            decoder: Rc::new(decoder),
            thumbnail_edge: settings.thumbnail_edge,
            seek_retry_delay: settings.seek_retry_delay,
        }
    }

    /// Decodes a batch concurrently and returns the survivors in drop order.
    ///
    /// The returned future resolves once every file has either decoded or
    /// failed, so the caller can append the whole batch at a single point.
    pub fn decode_batch(&self, files: Vec<DroppedFile>) -> LocalBoxFuture<'static, DecodedBatch> {
        let mut failures = Vec::new();
        let pending = FuturesUnordered::new();

        for (position, file) in files.into_iter().enumerate() {
            match MediaKind::from_mime(&file.mime) {
                Some(kind) => pending.push(self.decode_one(position, kind, file)),
                None => {
                    debug!(name = %file.name, mime = %file.mime, "skipping unsupported file");
                    failures.push(MediaError::UnsupportedMediaType {
                        name: file.name,
                        mime: file.mime,
                    });
                }
            }
        }

        async move {
            let outcomes: Vec<_> = pending.collect().await;
            let mut items = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                match outcome {
                    Ok(item) => items.push(item),
                    Err(err) => {
                        warn!(%err, "dropping file from batch");
                        failures.push(err);
                    }
                }
            }
            items.sort_by_key(|item| item.position);
            DecodedBatch { items, failures }
        }
        .boxed_local()
    }

    fn decode_one(
        &self,
        position: usize,
        kind: MediaKind,
        file: DroppedFile,
    ) -> LocalBoxFuture<'static, Result<DecodedItem, MediaError>> {
        let decoder = Rc::clone(&self.decoder);
        async move {
            let DroppedFile { name, mime, bytes } = file;
            let decode_failure = |err: DecoderError| MediaError::DecodeFailure {
                name: name.clone(),
                reason: err.0,
            };

            let video = match kind {
                MediaKind::Image => {
                    decoder
                        .decode_image(Arc::clone(&bytes))
                        .await
                        .map_err(decode_failure)?;
                    None
                }
                MediaKind::Video => Some(
                    decoder
                        .probe_video(Arc::clone(&bytes))
                        .await
                        .map_err(decode_failure)?,
                ),
            };

            Ok(DecodedItem {
                position,
                record: NewRecord {
                    kind,
                    source: MediaSource::new(bytes, mime),
                    display_name: name,
                },
                video,
            })
        }
        .boxed_local()
    }

    /// Resolves thumbnails for appended records.
    ///
    /// Images reuse their source. Videos get a poster frame captured near the
    /// start, retried once after a short delay before giving up.
    pub fn resolve_thumbnails(
        &self,
        pending: Vec<PendingThumbnail>,
    ) -> LocalBoxFuture<'static, ThumbnailBatch> {
        let jobs: Vec<_> = pending
            .into_iter()
            .map(|job| self.resolve_one(job))
            .collect();

        async move {
            let mut batch = ThumbnailBatch::default();
            for (resolved, failure) in join_all(jobs).await {
                batch.resolved.push(resolved);
                batch.failures.extend(failure);
            }
            batch
        }
        .boxed_local()
    }

    fn resolve_one(
        &self,
        job: PendingThumbnail,
    ) -> LocalBoxFuture<'static, (ResolvedThumbnail, Option<MediaError>)> {
        if job.kind == MediaKind::Image {
            let resolved = ResolvedThumbnail {
                id: job.id,
                thumbnail: Some(ThumbnailHandle::Source),
            };
            return futures_util::future::ready((resolved, None)).boxed_local();
        }

        let decoder = Rc::clone(&self.decoder);
        let edge = self.thumbnail_edge;
        let retry_delay = self.seek_retry_delay;
        async move {
            let at_secs = job.video.as_ref().map_or(POSTER_SEEK_SECS, |meta| {
                meta.poster_position(POSTER_SEEK_SECS, POSTER_TAIL_MARGIN_SECS)
            });
            let bytes = job.source.bytes();

            let frame = match decoder.capture_frame(Arc::clone(bytes), at_secs).await {
                Ok(frame) => Ok(frame),
                Err(err) => {
                    debug!(name = %job.name, %err, "poster capture failed, retrying");
                    tokio::time::sleep(retry_delay).await;
                    decoder.capture_frame(Arc::clone(bytes), at_secs).await
                }
            };

            let png = match frame {
                Ok(frame) => render_off_loop(frame, edge).await,
                Err(err) => Err(err.0),
            };

            match png {
                Ok(png) => (
                    ResolvedThumbnail {
                        id: job.id,
                        thumbnail: Some(ThumbnailHandle::Png(Arc::from(png))),
                    },
                    None,
                ),
                Err(reason) => {
                    let err = MediaError::ThumbnailGenerationFailure {
                        name: job.name,
                        reason,
                    };
                    warn!(%err, "keeping record without thumbnail");
                    (
                        ResolvedThumbnail {
                            id: job.id,
                            thumbnail: None,
                        },
                        Some(err),
                    )
                }
            }
        }
        .boxed_local()
    }
}

/// Renders a poster thumbnail on the blocking pool.
async fn render_off_loop(frame: RawImage, edge: ThumbnailEdge) -> Result<Vec<u8>, String> {
    tokio::task::spawn_blocking(move || render_video_thumbnail(&frame, edge))
        .await
        .map_err(|err| err.to_string())?
        .map_err(|err| err.to_string())
}
