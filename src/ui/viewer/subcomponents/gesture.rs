// SPDX-License-Identifier: MPL-2.0
//! Gesture router sub-component.
//!
//! Classifies the shared pointer/touch stream into swipe, drag, pinch, tap and
//! wheel intents. Classification happens when a gesture starts and whenever
//! the number of contacts changes:
//!
//! - two or more contacts pinch about their midpoint;
//! - one contact drags while zoomed;
//! - one contact swipes otherwise, navigating at most once per contact.

use crate::config::defaults::{MIN_PINCH_DISTANCE, TAP_SLOP_PX, WHEEL_ZOOM_STEP};
use crate::domain::ui::{Point, SwipeThreshold, Vector};
use crate::ui::state::{GestureContext, GestureMode};

/// Direction a swipe navigates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Gesture router state.
#[derive(Debug, Clone, Default)]
pub struct State {
    context: GestureContext,
    threshold: SwipeThreshold,
}

/// Raw input from the surface. Contact lists hold every contact currently down.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer down or touch start.
    Pressed(Vec<Point>),
    /// Pointer or touch move.
    Moved(Vec<Point>),
    /// Pointer up or touch end; lists the contacts still down.
    Released(Vec<Point>),
    /// Wheel scroll; negative `delta_y` scrolls up.
    Wheel { delta_y: f32, position: Point },
}

/// Intents produced by the router.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    Swipe(SwipeDirection),
    Pinch { factor: f32, focal: Point },
    Pan(Vector),
    WheelZoom { step: f32, focal: Point },
    Tap,
}

impl State {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            context: GestureContext::default(),
            threshold,
        }
    }

    /// Handle an input message.
    ///
    /// `zoomed` is the current zoom state; it decides between drag and swipe
    /// for a single contact.
    pub fn handle(&mut self, msg: Message, zoomed: bool) -> Effect {
        match msg {
            Message::Pressed(contacts) => {
                if self.context.is_active() {
                    self.sample(&contacts, zoomed)
                } else {
                    self.begin(&contacts, zoomed);
                    Effect::None
                }
            }
            Message::Moved(contacts) => {
                if self.context.is_active() {
                    self.sample(&contacts, zoomed)
                } else {
                    Effect::None
                }
            }
            Message::Released(contacts) => {
                if contacts.is_empty() {
                    self.finish()
                } else {
                    self.sample(&contacts, zoomed)
                }
            }
            Message::Wheel { delta_y, position } => Effect::WheelZoom {
                step: if delta_y < 0.0 {
                    WHEEL_ZOOM_STEP
                } else {
                    -WHEEL_ZOOM_STEP
                },
                focal: position,
            },
        }
    }

    fn begin(&mut self, contacts: &[Point], zoomed: bool) {
        match contacts {
            [] => {}
            [only] => self.context.begin(single_contact_mode(*only, zoomed, true), *only),
            [first, second, ..] => self.context.begin(
                GestureMode::Pinch {
                    last_distance: first.distance(*second),
                },
                first.midpoint(*second),
            ),
        }
    }

    fn sample(&mut self, contacts: &[Point], zoomed: bool) -> Effect {
        match contacts {
            [] => Effect::None,
            [only] => self.sample_single(*only, zoomed),
            [first, second, ..] => self.sample_pinch(*first, *second),
        }
    }

    fn sample_single(&mut self, position: Point, zoomed: bool) -> Effect {
        match self.context.mode {
            GestureMode::Idle => Effect::None,
            GestureMode::Swipe { start_x, armed } => {
                self.context.track(position);
                let delta_x = start_x - position.x;
                if armed && delta_x.abs() > self.threshold.value() {
                    self.context.mode = GestureMode::Swipe {
                        start_x,
                        armed: false,
                    };
                    Effect::Swipe(if delta_x > 0.0 {
                        SwipeDirection::Next
                    } else {
                        SwipeDirection::Previous
                    })
                } else {
                    Effect::None
                }
            }
            GestureMode::Drag { last } => {
                self.context.track(position);
                if position != last {
                    self.context.panned = true;
                }
                self.context.mode = GestureMode::Drag { last: position };
                Effect::Pan(position - last)
            }
            GestureMode::Pinch { .. } => {
                // Back to one contact after a pinch: never navigate right away.
                self.context.mode = single_contact_mode(position, zoomed, false);
                Effect::None
            }
        }
    }

    fn sample_pinch(&mut self, first: Point, second: Point) -> Effect {
        let distance = first.distance(second);
        match self.context.mode {
            GestureMode::Pinch { last_distance } => {
                self.context.mode = GestureMode::Pinch {
                    last_distance: distance,
                };
                if last_distance < MIN_PINCH_DISTANCE {
                    return Effect::None;
                }
                Effect::Pinch {
                    factor: distance / last_distance,
                    focal: first.midpoint(second),
                }
            }
            _ => {
                // A second contact joined; drop drag/swipe scratch.
                self.context.mode = GestureMode::Pinch {
                    last_distance: distance,
                };
                self.context.multi_contact = true;
                Effect::None
            }
        }
    }

    fn finish(&mut self) -> Effect {
        let tap = self.context.is_active() && self.context.is_tap(TAP_SLOP_PX);
        self.context.clear();
        if tap {
            Effect::Tap
        } else {
            Effect::None
        }
    }

    /// Current gesture scratch.
    #[must_use]
    pub fn context(&self) -> &GestureContext {
        &self.context
    }

    /// Abandons the current interaction.
    pub fn cancel(&mut self) {
        self.context.clear();
    }
}

fn single_contact_mode(position: Point, zoomed: bool, armed: bool) -> GestureMode {
    if zoomed {
        GestureMode::Drag { last: position }
    } else {
        GestureMode::Swipe {
            start_x: position.x,
            armed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn swipe_left_goes_next_once() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(300.0, 100.0)]), false);
        assert_eq!(state.handle(Message::Moved(vec![p(270.0, 100.0)]), false), Effect::None);
        assert_eq!(
            state.handle(Message::Moved(vec![p(240.0, 100.0)]), false),
            Effect::Swipe(SwipeDirection::Next)
        );
        // Further travel in the same contact does not navigate again.
        assert_eq!(state.handle(Message::Moved(vec![p(100.0, 100.0)]), false), Effect::None);
        assert_eq!(state.handle(Message::Moved(vec![p(500.0, 100.0)]), false), Effect::None);
        assert_eq!(state.handle(Message::Released(vec![]), false), Effect::None);
    }

    #[test]
    fn swipe_right_goes_previous() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(100.0, 0.0)]), false);
        assert_eq!(
            state.handle(Message::Moved(vec![p(151.0, 0.0)]), false),
            Effect::Swipe(SwipeDirection::Previous)
        );
    }

    #[test]
    fn exactly_threshold_does_not_fire() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(100.0, 0.0)]), false);
        assert_eq!(state.handle(Message::Moved(vec![p(50.0, 0.0)]), false), Effect::None);
    }

    #[test]
    fn new_contact_can_swipe_again() {
        let mut state = State::default();
        for _ in 0..2 {
            state.handle(Message::Pressed(vec![p(300.0, 0.0)]), false);
            assert_eq!(
                state.handle(Message::Moved(vec![p(200.0, 0.0)]), false),
                Effect::Swipe(SwipeDirection::Next)
            );
            state.handle(Message::Released(vec![]), false);
        }
    }

    #[test]
    fn drag_pans_while_zoomed() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(100.0, 100.0)]), true);
        assert_eq!(
            state.handle(Message::Moved(vec![p(130.0, 90.0)]), true),
            Effect::Pan(Vector::new(30.0, -10.0))
        );
        assert_eq!(
            state.handle(Message::Moved(vec![p(131.0, 90.0)]), true),
            Effect::Pan(Vector::new(1.0, 0.0))
        );
    }

    #[test]
    fn second_contact_mid_drag_switches_to_pinch() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(100.0, 100.0)]), true);
        state.handle(Message::Moved(vec![p(110.0, 100.0)]), true);

        assert_eq!(
            state.handle(Message::Pressed(vec![p(110.0, 100.0), p(210.0, 100.0)]), true),
            Effect::None
        );
        let effect = state.handle(Message::Moved(vec![p(60.0, 100.0), p(260.0, 100.0)]), true);
        let Effect::Pinch { factor, focal } = effect else {
            panic!("expected pinch, got {effect:?}");
        };
        assert_abs_diff_eq!(factor, 2.0, epsilon = F32_EPSILON);
        assert_eq!(focal, p(160.0, 100.0));
    }

    #[test]
    fn pinch_factor_is_relative_to_last_sample() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(0.0, 0.0), p(100.0, 0.0)]), false);
        state.handle(Message::Moved(vec![p(0.0, 0.0), p(150.0, 0.0)]), false);
        let effect = state.handle(Message::Moved(vec![p(0.0, 0.0), p(300.0, 0.0)]), false);
        assert_eq!(
            effect,
            Effect::Pinch {
                factor: 2.0,
                focal: p(150.0, 0.0)
            }
        );
    }

    #[test]
    fn dropping_to_one_contact_unzoomed_does_not_navigate() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(0.0, 0.0), p(100.0, 0.0)]), false);
        state.handle(Message::Released(vec![p(100.0, 0.0)]), false);
        assert_eq!(state.handle(Message::Moved(vec![p(-200.0, 0.0)]), false), Effect::None);
        assert_eq!(state.handle(Message::Released(vec![]), false), Effect::None);
    }

    #[test]
    fn dropping_to_one_contact_zoomed_drags() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(0.0, 0.0), p(100.0, 0.0)]), true);
        state.handle(Message::Released(vec![p(100.0, 0.0)]), true);
        assert_eq!(
            state.handle(Message::Moved(vec![p(90.0, 5.0)]), true),
            Effect::Pan(Vector::new(-10.0, 5.0))
        );
    }

    #[test]
    fn short_contact_is_a_tap() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(50.0, 50.0)]), false);
        state.handle(Message::Moved(vec![p(53.0, 52.0)]), false);
        assert_eq!(state.handle(Message::Released(vec![]), false), Effect::Tap);
        assert!(!state.context().is_active());
    }

    #[test]
    fn still_contact_on_zoomed_image_is_a_tap() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(50.0, 50.0)]), true);
        assert_eq!(state.handle(Message::Moved(vec![p(50.0, 50.0)]), true), Effect::Pan(Vector::new(0.0, 0.0)));
        assert_eq!(state.handle(Message::Released(vec![]), true), Effect::Tap);
    }

    #[test]
    fn short_drag_on_zoomed_image_is_not_a_tap() {
        let mut state = State::default();
        state.handle(Message::Pressed(vec![p(50.0, 50.0)]), true);
        assert_eq!(
            state.handle(Message::Moved(vec![p(53.0, 50.0)]), true),
            Effect::Pan(Vector::new(3.0, 0.0))
        );
        assert_eq!(state.handle(Message::Released(vec![]), true), Effect::None);
    }

    #[test]
    fn hover_moves_are_ignored() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Moved(vec![p(1.0, 1.0)]), false), Effect::None);
        assert_eq!(state.handle(Message::Released(vec![]), false), Effect::None);
    }

    #[test]
    fn wheel_direction_sets_step_sign() {
        let mut state = State::default();
        let focal = p(10.0, 20.0);
        assert_eq!(
            state.handle(Message::Wheel { delta_y: -3.0, position: focal }, false),
            Effect::WheelZoom { step: WHEEL_ZOOM_STEP, focal }
        );
        assert_eq!(
            state.handle(Message::Wheel { delta_y: 3.0, position: focal }, false),
            Effect::WheelZoom { step: -WHEEL_ZOOM_STEP, focal }
        );
    }
}
