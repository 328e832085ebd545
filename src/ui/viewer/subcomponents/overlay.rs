// SPDX-License-Identifier: MPL-2.0
//! Chrome visibility sub-component (thumbnail strip and navigation buttons).
//!
//! At most one hide timer is live. Every arm bumps the generation, so a
//! timer that fires after being superseded carries a stale token and is
//! ignored.

use crate::domain::ui::HideDelay;
use std::time::Duration;
use tracing::trace;

/// Why a hide was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// The pointer left the viewer.
    Left,
    /// The pointer stopped moving.
    Inactive,
}

/// Identifies a scheduled hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideToken {
    pub generation: u64,
    pub reason: HideReason,
}

/// A hide the driver should fire after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub token: HideToken,
    pub after: Duration,
}

/// Chrome visibility state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether the chrome is shown.
    pub visible: bool,
    /// Whether the pointer is over the chrome itself.
    over_chrome: bool,
    generation: u64,
    hide_delay: HideDelay,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PointerEntered,
    PointerMoved,
    PointerLeft,
    /// Pointer moved onto (`true`) or off (`false`) the chrome.
    OverChrome(bool),
    /// A hide timer fired.
    HideDue(HideToken),
}

/// Effects produced by overlay visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Chrome became visible; any pending hide is void.
    Shown,
    /// Arm the hide timer. `shown` is set if the chrome just became visible.
    ScheduleHide { shown: bool, hide: ScheduledHide },
    /// Chrome became hidden.
    Hidden,
}

impl State {
    #[must_use]
    pub fn new(hide_delay: HideDelay) -> Self {
        Self {
            hide_delay,
            ..Self::default()
        }
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerEntered => {
                self.generation += 1;
                if self.show() {
                    Effect::Shown
                } else {
                    Effect::None
                }
            }
            Message::PointerMoved => {
                let shown = self.show();
                Effect::ScheduleHide {
                    shown,
                    hide: self.arm(HideReason::Inactive),
                }
            }
            Message::PointerLeft => {
                self.over_chrome = false;
                Effect::ScheduleHide {
                    shown: false,
                    hide: self.arm(HideReason::Left),
                }
            }
            Message::OverChrome(over) => {
                self.over_chrome = over;
                Effect::None
            }
            Message::HideDue(token) => {
                if token.generation != self.generation {
                    trace!(?token, "ignoring superseded hide timer");
                    return Effect::None;
                }
                if token.reason == HideReason::Inactive && self.over_chrome {
                    return Effect::None;
                }
                if self.visible {
                    self.visible = false;
                    Effect::Hidden
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Returns true if visibility changed.
    fn show(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    fn arm(&mut self, reason: HideReason) -> ScheduledHide {
        self.generation += 1;
        ScheduledHide {
            token: HideToken {
                generation: self.generation,
                reason,
            },
            after: self.hide_delay.as_duration(),
        }
    }
}
