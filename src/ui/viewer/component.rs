// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! [`ViewerController`] owns the media store and every sub-component state.
//! All mutation goes through it: surface input arrives as [`Message`]s,
//! ingestion results through [`ViewerController::append_batch`] and
//! [`ViewerController::attach_thumbnails`], and every change leaves as a list
//! of [`Effect`]s for the surface and the timer driver.

use crate::application::query::{NavigationInfo, ThumbnailView, ViewSnapshot};
use crate::config::ViewerSettings;
use crate::domain::media::MediaRecord;
use crate::domain::ui::Size;
use crate::domain::video::{VideoDirective, VideoSignal};
use crate::media::ingest::{DecodedBatch, PendingThumbnail, ThumbnailBatch};
use crate::media::store::MediaStore;
use crate::ui::state::{TransformState, ViewportState};
use crate::ui::viewer::subcomponents::navigation::{AdvanceToken, ScheduledAdvance};
use crate::ui::viewer::subcomponents::overlay::ScheduledHide;
use crate::ui::viewer::subcomponents::{gesture, navigation, overlay, zoom};
use std::time::Instant;
use tracing::{debug, info};

/// Semantic keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Previous,
    Next,
    ToggleSlideshow,
}

impl KeyAction {
    /// Maps a DOM-style key name to an action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            " " | "Space" | "Spacebar" => Some(Self::ToggleSlideshow),
            _ => None,
        }
    }
}

/// Messages the surface and the timer driver send to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard action; ignored while the store is empty.
    Key(KeyAction),
    PreviousClicked,
    NextClicked,
    PlayPauseClicked,
    ThumbnailSelected(usize),
    RemoveRequested(usize),
    Gesture(gesture::Message),
    ViewportResized(Size),
    Video(VideoSignal),
    Chrome(overlay::Message),
    /// A slideshow advance timer fired.
    AdvanceDue(AdvanceToken),
}

/// Instructions for the presentation surface and the timer driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Render this record.
    ShowRecord {
        index: usize,
        record: MediaRecord,
        /// Set when the record is a video.
        video: Option<VideoDirective>,
    },
    /// Render the zero state.
    ShowEmpty,
    ApplyTransform(TransformState),
    /// The thumbnail list changed (records added/removed or thumbnails resolved).
    StoreUpdated { thumbnails: Vec<ThumbnailView> },
    /// Highlight a different thumbnail.
    ActiveIndexChanged(usize),
    SlideshowChanged { active: bool, label: &'static str },
    ChromeVisibilityChanged(bool),
    /// Replace the directive of the displayed video.
    ConfigureVideo(VideoDirective),
    /// Restart the displayed video.
    ReplayVideo,
    /// Fire [`Message::AdvanceDue`] after the delay.
    ScheduleAdvance(ScheduledAdvance),
    /// Fire a chrome hide after the delay, cancelling any pending one.
    ScheduleHide(ScheduledHide),
}

/// Records appended from a batch, plus the thumbnail work they still need.
#[derive(Debug, Clone, Default)]
pub struct Appended {
    pub effects: Vec<Effect>,
    pub pending: Vec<PendingThumbnail>,
}

/// The viewer core.
#[derive(Debug, Clone)]
pub struct ViewerController {
    store: MediaStore,
    navigation: navigation::State,
    zoom: zoom::State,
    gesture: gesture::State,
    overlay: overlay::State,
    viewport: ViewportState,
}

impl Default for ViewerController {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}

impl ViewerController {
    #[must_use]
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            store: MediaStore::new(),
            navigation: navigation::State::new(settings.slide_duration),
            zoom: zoom::State::default(),
            gesture: gesture::State::new(settings.swipe_threshold),
            overlay: overlay::State::new(settings.hide_delay),
            viewport: ViewportState::default(),
        }
    }

    /// Handles one message synchronously.
    pub fn handle(&mut self, msg: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Message::Key(action) => {
                if self.store.is_empty() {
                    return effects;
                }
                let nav = match action {
                    KeyAction::Previous => navigation::Message::NavigatePrevious,
                    KeyAction::Next => navigation::Message::NavigateNext,
                    KeyAction::ToggleSlideshow => navigation::Message::ToggleSlideshow,
                };
                self.navigate(nav, now, &mut effects);
            }
            Message::PreviousClicked => {
                self.navigate(navigation::Message::NavigatePrevious, now, &mut effects);
            }
            Message::NextClicked => {
                self.navigate(navigation::Message::NavigateNext, now, &mut effects);
            }
            Message::PlayPauseClicked => {
                self.navigate(navigation::Message::ToggleSlideshow, now, &mut effects);
            }
            Message::ThumbnailSelected(index) => {
                self.navigate(navigation::Message::NavigateTo(index), now, &mut effects);
            }
            Message::RemoveRequested(index) => {
                if let Some(removed) = self.store.remove(index) {
                    debug!(id = %removed.id, name = %removed.display_name, index, "removed record");
                    effects.push(self.store_updated());
                    self.after_removal(index, now, &mut effects);
                }
            }
            Message::Gesture(input) => {
                let intent = self.gesture.handle(input, self.zoom.is_zoomed());
                self.apply_intent(intent, now, &mut effects);
            }
            Message::ViewportResized(size) => {
                self.viewport.update(size);
            }
            Message::Video(signal) => {
                self.navigate(navigation::Message::Video(signal), now, &mut effects);
            }
            Message::Chrome(chrome) => match self.overlay.handle(chrome) {
                overlay::Effect::None => {}
                overlay::Effect::Shown => effects.push(Effect::ChromeVisibilityChanged(true)),
                overlay::Effect::ScheduleHide { shown, hide } => {
                    if shown {
                        effects.push(Effect::ChromeVisibilityChanged(true));
                    }
                    effects.push(Effect::ScheduleHide(hide));
                }
                overlay::Effect::Hidden => effects.push(Effect::ChromeVisibilityChanged(false)),
            },
            Message::AdvanceDue(token) => {
                self.navigate(navigation::Message::AdvanceDue(token), now, &mut effects);
            }
        }
        effects
    }

    /// Appends a decoded batch in one step.
    ///
    /// Displays index 0 if the store was empty, otherwise the last new record.
    /// A batch without records changes nothing.
    pub fn append_batch(&mut self, batch: DecodedBatch, now: Instant) -> Appended {
        if batch.is_empty() {
            debug!(failures = batch.failures.len(), "batch yielded no records");
            return Appended::default();
        }

        let was_empty = self.store.is_empty();
        let (records, videos): (Vec<_>, Vec<_>) = batch
            .items
            .into_iter()
            .map(|item| (item.record, item.video))
            .unzip();
        let range = self.store.append(records);
        info!(
            added = range.len(),
            skipped = batch.failures.len(),
            total = self.store.len(),
            "appended batch"
        );

        let pending = range
            .clone()
            .zip(videos)
            .filter_map(|(index, video)| {
                self.store
                    .get(index)
                    .map(|record| PendingThumbnail::for_record(record, video))
            })
            .collect();

        let mut effects = vec![self.store_updated()];
        let target = if was_empty { 0 } else { range.end - 1 };
        self.navigate(navigation::Message::NavigateTo(target), now, &mut effects);

        Appended { effects, pending }
    }

    /// Stores resolved thumbnails. Records removed in the meantime are skipped.
    pub fn attach_thumbnails(&mut self, batch: ThumbnailBatch) -> Vec<Effect> {
        for resolved in batch.resolved {
            if !self.store.set_thumbnail(resolved.id, resolved.thumbnail) {
                debug!(id = %resolved.id, "thumbnail for removed record dropped");
            }
        }
        vec![self.store_updated()]
    }

    fn navigate(&mut self, msg: navigation::Message, now: Instant, effects: &mut Vec<Effect>) {
        let effect = self.navigation.handle(msg, &self.store, now);
        self.apply_navigation(effect, effects);
    }

    /// Repositions navigation after a removal and announces a slideshow
    /// stopped for lack of records.
    fn after_removal(&mut self, index: usize, now: Instant, effects: &mut Vec<Effect>) {
        let was_running = self.navigation.mode().is_slideshow();
        let effect = self
            .navigation
            .handle(navigation::Message::Removed(index), &self.store, now);
        let redisplayed = matches!(
            effect,
            navigation::Effect::Display { .. } | navigation::Effect::Cleared
        );
        self.apply_navigation(effect, effects);

        if was_running && !self.navigation.mode().is_slideshow() && !self.store.is_empty() {
            info!(remaining = self.store.len(), "slideshow stopped");
            effects.push(self.slideshow_changed());
            if !redisplayed {
                effects.extend(
                    self.navigation
                        .current_video_directive(&self.store)
                        .map(Effect::ConfigureVideo),
                );
            }
        }
    }

    fn apply_navigation(&mut self, effect: navigation::Effect, effects: &mut Vec<Effect>) {
        match effect {
            navigation::Effect::None => {}
            navigation::Effect::Display {
                index,
                video,
                advance,
            } => {
                self.zoom.handle(zoom::Message::SetEnabled(video.is_none()));
                self.zoom.handle(zoom::Message::Reset);
                effects.push(Effect::ApplyTransform(self.zoom.transform()));
                if let Some(record) = self.store.get(index) {
                    debug!(index, id = %record.id, name = %record.display_name, "displaying record");
                    effects.push(Effect::ShowRecord {
                        index,
                        record: record.clone(),
                        video,
                    });
                }
                effects.push(Effect::ActiveIndexChanged(index));
                effects.extend(advance.map(Effect::ScheduleAdvance));
            }
            navigation::Effect::Cleared => {
                self.zoom.handle(zoom::Message::SetEnabled(true));
                self.zoom.handle(zoom::Message::Reset);
                self.gesture.cancel();
                effects.push(Effect::ApplyTransform(self.zoom.transform()));
                effects.push(Effect::ShowEmpty);
                effects.push(self.slideshow_changed());
            }
            navigation::Effect::IndexShifted { index, advance } => {
                effects.push(Effect::ActiveIndexChanged(index));
                effects.extend(advance.map(Effect::ScheduleAdvance));
            }
            navigation::Effect::SlideshowChanged {
                mode,
                video,
                advance,
            } => {
                info!(slideshow = mode.is_slideshow(), "slideshow toggled");
                effects.push(self.slideshow_changed());
                effects.extend(video.map(Effect::ConfigureVideo));
                effects.extend(advance.map(Effect::ScheduleAdvance));
            }
            navigation::Effect::ReplayVideo => effects.push(Effect::ReplayVideo),
            navigation::Effect::ScheduleAdvance(advance) => {
                effects.push(Effect::ScheduleAdvance(advance));
            }
        }
    }

    fn apply_intent(&mut self, intent: gesture::Effect, now: Instant, effects: &mut Vec<Effect>) {
        let center = self.viewport.center();
        let zoom_msg = match intent {
            gesture::Effect::None => return,
            gesture::Effect::Swipe(direction) => {
                let nav = match direction {
                    gesture::SwipeDirection::Next => navigation::Message::NavigateNext,
                    gesture::SwipeDirection::Previous => navigation::Message::NavigatePrevious,
                };
                self.navigate(nav, now, effects);
                return;
            }
            gesture::Effect::Pinch { factor, focal } => zoom::Message::Pinch {
                factor,
                focal,
                center,
            },
            gesture::Effect::Pan(delta) => zoom::Message::Pan(delta),
            gesture::Effect::WheelZoom { step, focal } => zoom::Message::Wheel {
                step,
                focal,
                center,
            },
            gesture::Effect::Tap => zoom::Message::Tap,
        };

        if self.store.is_empty() {
            return;
        }
        if let zoom::Effect::TransformChanged(transform) = self.zoom.handle(zoom_msg) {
            effects.push(Effect::ApplyTransform(transform));
        }
    }

    fn store_updated(&self) -> Effect {
        Effect::StoreUpdated {
            thumbnails: self.thumbnails(),
        }
    }

    fn slideshow_changed(&self) -> Effect {
        let mode = self.navigation.mode();
        Effect::SlideshowChanged {
            active: mode.is_slideshow(),
            label: mode.button_symbol(),
        }
    }

    fn thumbnails(&self) -> Vec<ThumbnailView> {
        let current = self.navigation.current_index();
        self.store
            .iter()
            .enumerate()
            .map(|(index, record)| ThumbnailView {
                id: record.id,
                name: record.display_name.clone(),
                kind: record.kind,
                thumbnail: record.thumbnail.clone(),
                source: record.source.clone(),
                active: current == Some(index),
            })
            .collect()
    }

    /// Read-only view of everything the surface renders.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let mode = self.navigation.mode();
        let current = self
            .navigation
            .current_index()
            .and_then(|index| self.store.get(index))
            .cloned();
        let transform = self.zoom.transform();

        ViewSnapshot {
            navigation: self.navigation_info(),
            video: current
                .as_ref()
                .filter(|record| record.is_video())
                .map(|_| mode.video_directive()),
            current,
            thumbnails: self.thumbnails(),
            slideshow_active: mode.is_slideshow(),
            slideshow_label: mode.button_symbol(),
            chrome_visible: self.overlay.visible,
            zoom_scale: transform.scale.value(),
            offset: transform.screen_offset(),
        }
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo::new(self.navigation.current_index(), self.store.len())
    }

    #[must_use]
    pub fn store(&self) -> &MediaStore {
        &self.store
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.navigation.current_index()
    }

    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.zoom.transform()
    }

    #[must_use]
    pub fn is_slideshow_active(&self) -> bool {
        self.navigation.mode().is_slideshow()
    }
}
