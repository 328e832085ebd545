// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating TransformState and its handlers.

use crate::domain::ui::{Point, Vector};
use crate::ui::state::TransformState;

/// Zoom sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// The underlying transform.
    pub inner: TransformState,
    /// Cleared while a video is displayed.
    enabled: bool,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Add `step` to the scale about `focal`.
    Wheel { step: f32, focal: Point, center: Point },
    /// Multiply the scale by `factor` about `focal`.
    Pinch { factor: f32, focal: Point, center: Point },
    /// Pan by a screen-space displacement.
    Pan(Vector),
    /// Tap or click on the media.
    Tap,
    /// Reset to identity (navigation).
    Reset,
    /// Enable or disable zooming; disabling resets.
    SetEnabled(bool),
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Transform changed.
    TransformChanged(TransformState),
}

impl Default for State {
    fn default() -> Self {
        Self {
            inner: TransformState::IDENTITY,
            enabled: true,
        }
    }
}

impl State {
    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let before = self.inner;
        match msg {
            Message::Wheel { step, focal, center } => {
                if !self.enabled {
                    return Effect::None;
                }
                let scale = self.inner.scale.offset_by(step);
                self.inner.zoom_at(scale, focal, center);
            }
            Message::Pinch { factor, focal, center } => {
                if !self.enabled || !factor.is_finite() {
                    return Effect::None;
                }
                let scale = self.inner.scale.multiplied_by(factor);
                self.inner.zoom_at(scale, focal, center);
            }
            Message::Pan(delta) => {
                if !self.enabled || !self.inner.is_zoomed() {
                    return Effect::None;
                }
                self.inner.pan_by(delta);
            }
            Message::Tap => {
                if !self.enabled || !self.inner.is_zoomed() {
                    return Effect::None;
                }
                self.inner.reset();
            }
            Message::Reset => self.inner.reset(),
            Message::SetEnabled(enabled) => {
                self.enabled = enabled;
                if !enabled {
                    self.inner.reset();
                }
            }
        }

        if self.inner == before {
            Effect::None
        } else {
            Effect::TransformChanged(self.inner)
        }
    }

    /// Whether the media is zoomed in.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.inner.is_zoomed()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, WHEEL_ZOOM_STEP};
    use crate::test_utils::assert_abs_diff_eq;

    const CENTER: Point = Point::new(200.0, 200.0);

    fn wheel(step: f32) -> Message {
        Message::Wheel {
            step,
            focal: Point::new(260.0, 140.0),
            center: CENTER,
        }
    }

    #[test]
    fn wheel_zooms_in_and_out() {
        let mut state = State::default();
        let effect = state.handle(wheel(WHEEL_ZOOM_STEP));
        assert!(matches!(effect, Effect::TransformChanged(_)));
        assert_abs_diff_eq!(state.inner.scale.value(), 1.1, epsilon = 1e-5);

        state.handle(wheel(-WHEEL_ZOOM_STEP));
        assert!(state.inner.is_identity());
    }

    #[test]
    fn wheel_out_at_identity_is_a_noop() {
        let mut state = State::default();
        assert_eq!(state.handle(wheel(-WHEEL_ZOOM_STEP)), Effect::None);
    }

    #[test]
    fn scale_stays_in_range_for_any_sequence() {
        let mut state = State::default();
        let steps = [0.1, 0.1, 5.0, -0.1, 0.3, -9.0, 0.1];
        let factors = [1.5, 4.0, 0.2, 1.01, 100.0, 0.0];
        for (step, factor) in steps.iter().zip(factors.iter().cycle()) {
            state.handle(wheel(*step));
            state.handle(Message::Pinch {
                factor: *factor,
                focal: Point::new(10.0, 390.0),
                center: CENTER,
            });
            let scale = state.inner.scale.value();
            assert!((MIN_ZOOM_SCALE..=MAX_ZOOM_SCALE).contains(&scale));
        }
    }

    #[test]
    fn pan_requires_zoom() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Pan(Vector::new(10.0, 0.0))), Effect::None);

        state.handle(wheel(1.0));
        assert!(matches!(
            state.handle(Message::Pan(Vector::new(10.0, 0.0))),
            Effect::TransformChanged(_)
        ));
    }

    #[test]
    fn tap_resets_only_when_zoomed() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Tap), Effect::None);

        state.handle(wheel(0.5));
        assert_eq!(
            state.handle(Message::Tap),
            Effect::TransformChanged(TransformState::IDENTITY)
        );
    }

    #[test]
    fn disabled_zoom_ignores_input() {
        let mut state = State::default();
        state.handle(wheel(0.5));
        assert_eq!(
            state.handle(Message::SetEnabled(false)),
            Effect::TransformChanged(TransformState::IDENTITY)
        );
        assert_eq!(state.handle(wheel(0.5)), Effect::None);
        assert_eq!(state.handle(Message::Tap), Effect::None);
        assert!(!state.is_enabled());
    }
}
