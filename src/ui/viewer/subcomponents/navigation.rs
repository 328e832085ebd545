// SPDX-License-Identifier: MPL-2.0
//! Navigation and playback sub-component.
//!
//! Owns the current index and the slideshow mode. Image slides advance on a
//! timer scheduled per display; video slides advance when the surface reports
//! `ended`, unless the slot is not used up yet, in which case the clip replays.

use crate::config::defaults::MIN_SLIDESHOW_RECORDS;
use crate::domain::media::MediaKind;
use crate::domain::ui::SlideDuration;
use crate::domain::video::{PlaybackMode, VideoDirective, VideoSignal};
use crate::media::store::MediaStore;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Identifies the display an advance timer was scheduled for.
///
/// A token is honored only if the same index is still shown, nothing was
/// displayed since (the generation matches) and the slideshow still runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    pub index: usize,
    pub generation: u64,
}

/// A deferred advance the driver should fire after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub token: AdvanceToken,
    pub after: Duration,
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    current: Option<usize>,
    mode: PlaybackMode,
    slide_duration: SlideDuration,
    video_started_at: Option<Instant>,
    generation: u64,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Jump to a position (thumbnail click, freshly appended batch).
    NavigateTo(usize),
    NavigateNext,
    NavigatePrevious,
    ToggleSlideshow,
    /// An advance timer fired.
    AdvanceDue(AdvanceToken),
    /// Signal from the displayed video.
    Video(VideoSignal),
    /// The record at this position was removed from the store.
    Removed(usize),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A record is now displayed; the transform must be reset.
    Display {
        index: usize,
        /// Set when the record is a video.
        video: Option<VideoDirective>,
        advance: Option<ScheduledAdvance>,
    },
    /// The store is empty; show the zero state.
    Cleared,
    /// The same record stays displayed at a new position.
    IndexShifted {
        index: usize,
        advance: Option<ScheduledAdvance>,
    },
    /// Slideshow started or stopped.
    SlideshowChanged {
        mode: PlaybackMode,
        /// Replaces the directive of a displayed video.
        video: Option<VideoDirective>,
        advance: Option<ScheduledAdvance>,
    },
    /// The displayed video should restart from the beginning.
    ReplayVideo,
    /// Schedule an advance without changing the display.
    ScheduleAdvance(ScheduledAdvance),
}

impl State {
    /// Creates a navigation state with the given slide duration.
    #[must_use]
    pub fn new(slide_duration: SlideDuration) -> Self {
        Self {
            slide_duration,
            ..Self::default()
        }
    }

    /// Handle a navigation message against the current store contents.
    ///
    /// `now` stamps video playback starts and is compared against them when a
    /// video ends.
    pub fn handle(&mut self, msg: Message, store: &MediaStore, now: Instant) -> Effect {
        match msg {
            Message::NavigateTo(index) => {
                if index < store.len() {
                    self.display(index, store)
                } else {
                    debug!(index, len = store.len(), "ignoring navigation outside the store");
                    Effect::None
                }
            }
            Message::NavigateNext => match self.current.and_then(|i| store.next_index(i)) {
                Some(next) => self.display(next, store),
                None => Effect::None,
            },
            Message::NavigatePrevious => match self.current.and_then(|i| store.previous_index(i)) {
                Some(previous) => self.display(previous, store),
                None => Effect::None,
            },
            Message::ToggleSlideshow => self.toggle_slideshow(store, now),
            Message::AdvanceDue(token) => {
                if self.is_current(token) {
                    self.handle(Message::NavigateNext, store, now)
                } else {
                    debug!(?token, "dropping stale slideshow advance");
                    Effect::None
                }
            }
            Message::Video(signal) => self.handle_video(signal, store, now),
            Message::Removed(index) => self.handle_removed(index, store),
        }
    }

    fn display(&mut self, index: usize, store: &MediaStore) -> Effect {
        self.current = Some(index);
        self.video_started_at = None;
        self.generation += 1;

        let kind = store.kind_at(index);
        Effect::Display {
            index,
            video: kind
                .filter(|k| k.is_video())
                .map(|_| self.mode.video_directive()),
            advance: self.image_advance(kind),
        }
    }

    /// Timed advance for an image slide while the slideshow runs.
    fn image_advance(&self, kind: Option<MediaKind>) -> Option<ScheduledAdvance> {
        if !self.mode.is_slideshow() || kind != Some(MediaKind::Image) {
            return None;
        }
        self.timed_advance()
    }

    fn timed_advance(&self) -> Option<ScheduledAdvance> {
        self.current.map(|index| ScheduledAdvance {
            token: AdvanceToken {
                index,
                generation: self.generation,
            },
            after: self.slide_duration.as_duration(),
        })
    }

    fn is_current(&self, token: AdvanceToken) -> bool {
        self.mode.is_slideshow()
            && self.generation == token.generation
            && self.current == Some(token.index)
    }

    fn toggle_slideshow(&mut self, store: &MediaStore, now: Instant) -> Effect {
        let kind = self.current.and_then(|i| store.kind_at(i));

        if self.mode.is_slideshow() {
            self.mode = PlaybackMode::Paused;
            self.generation += 1;
            return Effect::SlideshowChanged {
                mode: self.mode,
                video: kind
                    .filter(|k| k.is_video())
                    .map(|_| self.mode.video_directive()),
                advance: None,
            };
        }

        if store.len() < MIN_SLIDESHOW_RECORDS {
            debug!(len = store.len(), "slideshow needs at least two records");
            return Effect::None;
        }

        self.mode = PlaybackMode::Slideshow;
        self.generation += 1;
        let video = if kind == Some(MediaKind::Video) {
            // The running clip's slot starts now.
            self.video_started_at = Some(now);
            Some(self.mode.video_directive())
        } else {
            None
        };

        Effect::SlideshowChanged {
            mode: self.mode,
            video,
            advance: self.image_advance(kind),
        }
    }

    fn handle_video(&mut self, signal: VideoSignal, store: &MediaStore, now: Instant) -> Effect {
        let showing_video = self
            .current
            .and_then(|i| store.kind_at(i))
            .is_some_and(MediaKind::is_video);
        if !showing_video {
            return Effect::None;
        }

        match signal {
            VideoSignal::LoadedMetadata { duration_secs } => {
                debug!(duration_secs, "video metadata loaded");
                Effect::None
            }
            VideoSignal::Play => {
                if self.video_started_at.is_none() {
                    self.video_started_at = Some(now);
                }
                Effect::None
            }
            VideoSignal::Ended => {
                if !self.mode.is_slideshow() {
                    return Effect::None;
                }
                let Some(started) = self.video_started_at else {
                    self.video_started_at = Some(now);
                    return Effect::ReplayVideo;
                };
                if now.saturating_duration_since(started) < self.slide_duration.as_duration() {
                    Effect::ReplayVideo
                } else {
                    self.handle(Message::NavigateNext, store, now)
                }
            }
            VideoSignal::Error(reason) => {
                warn!(%reason, "video playback failed");
                if self.mode.is_slideshow() {
                    self.timed_advance().map_or(Effect::None, Effect::ScheduleAdvance)
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Adjusts the current index after the store removed `index`.
    fn handle_removed(&mut self, index: usize, store: &MediaStore) -> Effect {
        let Some(current) = self.current else {
            return Effect::None;
        };

        if store.is_empty() {
            self.current = None;
            self.mode = PlaybackMode::Paused;
            self.video_started_at = None;
            self.generation += 1;
            return Effect::Cleared;
        }

        if self.mode.is_slideshow() && store.len() < MIN_SLIDESHOW_RECORDS {
            debug!(len = store.len(), "slideshow stopped, too few records left");
            self.mode = PlaybackMode::Paused;
            self.video_started_at = None;
            self.generation += 1;
        }

        match index.cmp(&current) {
            std::cmp::Ordering::Equal => self.display(index.min(store.len() - 1), store),
            std::cmp::Ordering::Less => {
                let shifted = current - 1;
                self.current = Some(shifted);
                // Pending timers carry the old index; reissue for the new one.
                self.generation += 1;
                Effect::IndexShifted {
                    index: shifted,
                    advance: self.image_advance(store.kind_at(shifted)),
                }
            }
            std::cmp::Ordering::Greater => Effect::None,
        }
    }

    /// Index of the displayed record.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Directive for the displayed record when it is a video.
    #[must_use]
    pub fn current_video_directive(&self, store: &MediaStore) -> Option<VideoDirective> {
        self.current
            .and_then(|index| store.kind_at(index))
            .filter(|kind| kind.is_video())
            .map(|_| self.mode.video_directive())
    }

    #[must_use]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[must_use]
    pub fn slide_duration(&self) -> SlideDuration {
        self.slide_duration
    }

    /// When the displayed video started its current slot.
    #[must_use]
    pub fn video_started_at(&self) -> Option<Instant> {
        self.video_started_at
    }
}
