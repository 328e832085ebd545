// SPDX-License-Identifier: MPL-2.0
//! Application root: the event loop around the viewer core.
//!
//! [`App`] receives [`Message`]s from the presentation surface, feeds them to
//! the [`ViewerController`], forwards the resulting effects to the surface and
//! turns scheduling effects into timers. Ingestion runs as local tasks whose
//! results come back as messages, so every state change happens on the loop.
//!
//! The loop is single-threaded: [`App::run`] must be awaited inside a
//! [`tokio::task::LocalSet`].

mod message;

pub use message::Message;

use crate::application::port::MediaDecoder;
use crate::config::ViewerSettings;
use crate::domain::error::MediaError;
use crate::media::ingest::IngestPipeline;
use crate::ui::viewer::component::{self, Effect, ViewerController};
use crate::ui::viewer::subcomponents::overlay;
use std::fmt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Renders viewer effects.
///
/// Implemented by the host: a browser binding, or the logging surface of the
/// desktop binary.
pub trait PresentationSurface {
    fn apply(&mut self, effect: &Effect);

    /// Per-item failures of an ingestion phase. Never called with an empty slice.
    fn report_failures(&mut self, _failures: &[MediaError]) {}

    /// A dropped batch has finished both ingestion phases.
    fn batch_settled(&mut self) {}
}

/// Application root state.
pub struct App<S, D> {
    viewer: ViewerController,
    pipeline: IngestPipeline<D>,
    surface: S,
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
    /// The single live chrome hide timer.
    hide_timer: Option<JoinHandle<()>>,
}

impl<S, D> fmt::Debug for App<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("hide_timer_armed", &self.hide_timer.is_some())
            .finish_non_exhaustive()
    }
}

impl<S, D> App<S, D>
where
    S: PresentationSurface,
    D: MediaDecoder + 'static,
{
    pub fn new(settings: &ViewerSettings, decoder: D, surface: S) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            viewer: ViewerController::new(settings),
            pipeline: IngestPipeline::new(decoder, settings),
            surface,
            sender,
            receiver,
            hide_timer: None,
        }
    }

    /// Handle for posting messages to the loop.
    #[must_use]
    pub fn sender(&self) -> UnboundedSender<Message> {
        self.sender.clone()
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerController {
        &self.viewer
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Runs until [`Message::Shutdown`] and hands the surface back.
    pub async fn run(mut self) -> S {
        while let Some(message) = self.receiver.recv().await {
            if !self.update(message) {
                break;
            }
        }
        if let Some(timer) = self.hide_timer.take() {
            timer.abort();
        }
        info!("event loop stopped");
        self.surface
    }

    /// Returns false once the loop should stop.
    fn update(&mut self, message: Message) -> bool {
        let now = tokio::time::Instant::now().into_std();
        match message {
            Message::Viewer(msg) => {
                let effects = self.viewer.handle(msg, now);
                self.dispatch(effects);
            }
            Message::FilesDropped(files) => {
                debug!(count = files.len(), "files dropped");
                let decode = self.pipeline.decode_batch(files);
                let sender = self.sender.clone();
                tokio::task::spawn_local(async move {
                    let batch = decode.await;
                    let _ = sender.send(Message::BatchDecoded(batch));
                });
            }
            Message::BatchDecoded(batch) => {
                if !batch.failures.is_empty() {
                    self.surface.report_failures(&batch.failures);
                }
                let appended = self.viewer.append_batch(batch, now);
                self.dispatch(appended.effects);
                if appended.pending.is_empty() {
                    self.surface.batch_settled();
                } else {
                    let resolve = self.pipeline.resolve_thumbnails(appended.pending);
                    let sender = self.sender.clone();
                    tokio::task::spawn_local(async move {
                        let thumbnails = resolve.await;
                        let _ = sender.send(Message::ThumbnailsResolved(thumbnails));
                    });
                }
            }
            Message::ThumbnailsResolved(thumbnails) => {
                if !thumbnails.failures.is_empty() {
                    self.surface.report_failures(&thumbnails.failures);
                }
                let effects = self.viewer.attach_thumbnails(thumbnails);
                self.dispatch(effects);
                self.surface.batch_settled();
            }
            Message::Shutdown => return false,
        }
        true
    }

    fn dispatch(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.surface.apply(&effect);
            match effect {
                Effect::ScheduleAdvance(advance) => {
                    let sender = self.sender.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(advance.after).await;
                        let _ = sender.send(component::Message::AdvanceDue(advance.token).into());
                    });
                }
                Effect::ScheduleHide(hide) => {
                    if let Some(previous) = self.hide_timer.take() {
                        previous.abort();
                    }
                    let sender = self.sender.clone();
                    self.hide_timer = Some(tokio::task::spawn_local(async move {
                        tokio::time::sleep(hide.after).await;
                        let due = overlay::Message::HideDue(hide.token);
                        let _ = sender.send(component::Message::Chrome(due).into());
                    }));
                }
                _ => {}
            }
        }
    }
}
