// SPDX-License-Identifier: MPL-2.0
//! Shared harness: a scripted decoder and a recording surface around the
//! application event loop.
#![allow(dead_code)]

use futures_util::future::{ready, LocalBoxFuture};
use futures_util::FutureExt;
use lens_gallery::app::{App, Message, PresentationSurface};
use lens_gallery::application::port::{DecoderError, ImageInfo, MediaDecoder};
use lens_gallery::config::ViewerSettings;
use lens_gallery::domain::error::MediaError;
use lens_gallery::domain::media::{RawImage, VideoMetadata};
use lens_gallery::media::ingest::DroppedFile;
use lens_gallery::ui::viewer::{Effect, Message as ViewerMessage};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{JoinHandle, LocalSet};

/// Decoder whose latency (ms) is the first payload byte.
/// Payloads starting with `0xFF` fail to decode.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDecoder {
    /// Number of upcoming frame captures that fail.
    pub capture_failures: Rc<Cell<u32>>,
    pub captures: Rc<Cell<u32>>,
}

impl ScriptedDecoder {
    pub fn failing_captures(count: u32) -> Self {
        let decoder = Self::default();
        decoder.capture_failures.set(count);
        decoder
    }

    fn latency(bytes: &[u8]) -> Duration {
        Duration::from_millis(u64::from(bytes.first().copied().unwrap_or(0)))
    }
}

impl MediaDecoder for ScriptedDecoder {
    fn decode_image(&self, bytes: Arc<[u8]>) -> LocalBoxFuture<'static, Result<ImageInfo, DecoderError>> {
        async move {
            tokio::time::sleep(Self::latency(&bytes)).await;
            if bytes.first() == Some(&0xFF) {
                return Err(DecoderError::new("corrupt image"));
            }
            Ok(ImageInfo { width: 4, height: 4 })
        }
        .boxed_local()
    }

    fn probe_video(
        &self,
        bytes: Arc<[u8]>,
    ) -> LocalBoxFuture<'static, Result<VideoMetadata, DecoderError>> {
        async move {
            tokio::time::sleep(Self::latency(&bytes)).await;
            if bytes.first() == Some(&0xFF) {
                return Err(DecoderError::new("no video track"));
            }
            Ok(VideoMetadata::new(16, 9, 12.0))
        }
        .boxed_local()
    }

    fn capture_frame(
        &self,
        _bytes: Arc<[u8]>,
        _at_secs: f64,
    ) -> LocalBoxFuture<'static, Result<RawImage, DecoderError>> {
        self.captures.set(self.captures.get() + 1);
        let remaining = self.capture_failures.get();
        if remaining > 0 {
            self.capture_failures.set(remaining - 1);
            return ready(Err(DecoderError::new("seek not ready"))).boxed_local();
        }
        ready(Ok(RawImage::from_rgba(16, 9, vec![90; 16 * 9 * 4]))).boxed_local()
    }
}

/// Everything the surface was told.
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub effects: Vec<Effect>,
    pub failures: Vec<MediaError>,
    pub settled: usize,
}

pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl PresentationSurface for RecordingSurface {
    fn apply(&mut self, effect: &Effect) {
        self.log.borrow_mut().effects.push(effect.clone());
    }

    fn report_failures(&mut self, failures: &[MediaError]) {
        self.log.borrow_mut().failures.extend_from_slice(failures);
    }

    fn batch_settled(&mut self) {
        self.log.borrow_mut().settled += 1;
    }
}

/// A running event loop. Must be created inside a [`LocalSet`].
pub struct Harness {
    sender: UnboundedSender<Message>,
    log: Rc<RefCell<SurfaceLog>>,
    task: JoinHandle<RecordingSurface>,
}

impl Harness {
    pub fn start(decoder: ScriptedDecoder) -> Self {
        Self::with_settings(decoder, &ViewerSettings::default())
    }

    pub fn with_settings(decoder: ScriptedDecoder, settings: &ViewerSettings) -> Self {
        let log = Rc::new(RefCell::new(SurfaceLog::default()));
        let surface = RecordingSurface {
            log: Rc::clone(&log),
        };
        let app = App::new(settings, decoder, surface);
        let sender = app.sender();
        let task = tokio::task::spawn_local(app.run());
        Self { sender, log, task }
    }

    pub fn send(&self, message: impl Into<Message>) {
        self.sender
            .send(message.into())
            .expect("event loop should be running");
    }

    pub fn viewer(&self, message: ViewerMessage) {
        self.send(message);
    }

    pub fn drop_files(&self, files: Vec<DroppedFile>) {
        self.send(Message::FilesDropped(files));
    }

    /// Lets the loop drain without reaching any viewer timer.
    pub async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    pub async fn advance(&self, millis: u64) {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }

    /// Drains recorded effects.
    pub fn take_effects(&self) -> Vec<Effect> {
        std::mem::take(&mut self.log.borrow_mut().effects)
    }

    pub fn failures(&self) -> Vec<MediaError> {
        self.log.borrow().failures.clone()
    }

    pub fn settled(&self) -> usize {
        self.log.borrow().settled
    }

    pub async fn shutdown(self) {
        self.send(Message::Shutdown);
        self.task.await.expect("event loop task panicked");
    }
}

/// Indices of every `ShowRecord` effect, in order.
pub fn shown(effects: &[Effect]) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowRecord { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

/// Thumbnail names of the last store update.
pub fn strip_names(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .rev()
        .find_map(|effect| match effect {
            Effect::StoreUpdated { thumbnails } => {
                Some(thumbnails.iter().map(|t| t.name.clone()).collect())
            }
            _ => None,
        })
        .unwrap_or_default()
}

pub fn image(name: &str, latency_ms: u8) -> DroppedFile {
    DroppedFile::new(name, "image/png", vec![latency_ms, 1, 2, 3])
}

pub fn video(name: &str, latency_ms: u8) -> DroppedFile {
    DroppedFile::new(name, "video/mp4", vec![latency_ms, 9, 9, 9])
}

pub async fn run_local<F: Future>(future: F) -> F::Output {
    LocalSet::new().run_until(future).await
}
