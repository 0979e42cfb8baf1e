// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-place slider controller with change reporting.
//!
//! [`SliderController`] owns a [`SliderState`] and applies actions to it one at a
//! time. Each call returns a [`Transition`] describing the observable change, and
//! a monotonically increasing [`revision`](SliderController::revision) counter
//! bumps only when something observable changed.
//!
//! ```
//! use understory_slider::{SliderConfig, SliderController};
//!
//! let mut slider = SliderController::new(SliderConfig::new().with_initial_ratio(0.5));
//!
//! let t = slider.drag_start(50.0, 100.0);
//! assert!(t.drag_started());
//!
//! slider.drag_move(70.0);
//! let t = slider.drag_end(70.0);
//! assert!(t.committed());
//! assert!(!slider.snapshot().pristine);
//! ```

use crate::trace::SliderTrace;
use crate::{Axis, Ignored, SliderAction, SliderState};

/// Construction parameters for a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Starting ratio; clamped into `[0, 1]`, NaN becomes `0.0`.
    pub initial_ratio: f64,
    /// Axis the slider measures along. Fixed for the slider's lifetime.
    pub axis: Axis,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            initial_ratio: 0.0,
            axis: Axis::Horizontal,
        }
    }
}

impl SliderConfig {
    /// Returns the default configuration: ratio `0.0`, horizontal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting ratio.
    #[must_use]
    pub fn with_initial_ratio(mut self, ratio: f64) -> Self {
        self.initial_ratio = ratio;
        self
    }

    /// Sets the axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Builds the initial state for this configuration.
    #[must_use]
    pub fn initial_state(&self) -> SliderState {
        SliderState::new(self.axis, self.initial_ratio)
    }
}

/// The host-visible part of a slider's state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderSnapshot {
    /// Current ratio in `[0, 1]`.
    pub ratio: f64,
    /// A drag is in progress.
    pub sliding: bool,
    /// The ratio was last set by the application, not the user.
    pub pristine: bool,
}

impl From<&SliderState> for SliderSnapshot {
    fn from(state: &SliderState) -> Self {
        Self {
            ratio: state.ratio(),
            sliding: state.is_sliding(),
            pristine: state.is_pristine(),
        }
    }
}

/// Observable change produced by one action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Snapshot before the action.
    pub before: SliderSnapshot,
    /// Snapshot after the action.
    pub after: SliderSnapshot,
}

impl Transition {
    /// Returns `true` if any observable field changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// Returns `true` if the ratio changed.
    #[must_use]
    pub fn ratio_changed(&self) -> bool {
        self.before.ratio != self.after.ratio
    }

    /// Returns `true` if this action began a drag.
    #[must_use]
    pub fn drag_started(&self) -> bool {
        !self.before.sliding && self.after.sliding
    }

    /// Returns `true` if this action ended a drag.
    #[must_use]
    pub fn drag_ended(&self) -> bool {
        self.before.sliding && !self.after.sliding
    }

    /// Returns `true` when the user just settled on a value.
    ///
    /// This is the point where a host would persist the ratio: a drag was
    /// released or the track was clicked, and the result did not come from
    /// the application.
    #[must_use]
    pub fn committed(&self) -> bool {
        self.changed() && !self.after.sliding && !self.after.pristine
    }
}

/// Owns a [`SliderState`] and applies actions to it in arrival order.
#[derive(Clone, Debug)]
pub struct SliderController {
    state: SliderState,
    revision: u64,
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl SliderController {
    /// Creates a controller from a configuration.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        Self::from_state(config.initial_state())
    }

    /// Creates a controller that starts from an existing state.
    #[must_use]
    pub fn from_state(state: SliderState) -> Self {
        Self { state, revision: 0 }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Returns the host-visible snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot::from(&self.state)
    }

    /// The axis this slider measures along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.state.axis()
    }

    /// Current ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.state.ratio()
    }

    /// Counter that increases whenever the snapshot changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one action.
    pub fn apply(&mut self, action: SliderAction) -> Transition {
        self.apply_with_trace(action, &mut NoTrace)
    }

    /// Applies one action and reports the outcome to `trace`.
    pub fn apply_with_trace(
        &mut self,
        action: SliderAction,
        trace: &mut impl SliderTrace,
    ) -> Transition {
        let prev = self.state;
        let before = SliderSnapshot::from(&prev);
        match prev.try_reduce(action) {
            Ok(next) => {
                self.state = next;
                trace.applied(&action, &prev, &next);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    ?action,
                    ratio = next.ratio(),
                    sliding = next.is_sliding(),
                    pristine = next.is_pristine(),
                    "slider action applied"
                );
            }
            Err(reason) => {
                trace.ignored(&action, &prev, reason);
                #[cfg(feature = "tracing")]
                tracing::debug!(?action, %reason, "slider action ignored");
            }
        }
        let transition = Transition {
            before,
            after: self.snapshot(),
        };
        if transition.changed() {
            self.revision += 1;
        }
        transition
    }

    /// See [`SliderState::set_explicit_ratio`].
    pub fn set_explicit_ratio(&mut self, ratio: f64) -> Transition {
        self.apply(SliderAction::SetExplicitRatio { ratio })
    }

    /// See [`SliderState::drag_start`].
    pub fn drag_start(&mut self, coord: f64, extent: f64) -> Transition {
        self.apply(SliderAction::DragStart { coord, extent })
    }

    /// See [`SliderState::drag_move`].
    pub fn drag_move(&mut self, coord: f64) -> Transition {
        self.apply(SliderAction::DragMove { coord })
    }

    /// See [`SliderState::drag_end`].
    pub fn drag_end(&mut self, coord: f64) -> Transition {
        self.apply(SliderAction::DragEnd { coord })
    }

    /// See [`SliderState::jump_to_position`].
    pub fn jump_to_position(&mut self, coord: f64, extent: f64) -> Transition {
        self.apply(SliderAction::JumpToPosition { coord, extent })
    }
}

struct NoTrace;

impl SliderTrace for NoTrace {
    fn applied(&mut self, _: &SliderAction, _: &SliderState, _: &SliderState) {}

    fn ignored(&mut self, _: &SliderAction, _: &SliderState, _: Ignored) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceEntry, TraceLog};

    #[test]
    fn config_defaults() {
        let config = SliderConfig::default();
        assert_eq!(config.initial_ratio, 0.0);
        assert_eq!(config.axis, Axis::Horizontal);

        let slider = SliderController::default();
        assert_eq!(
            slider.snapshot(),
            SliderSnapshot {
                ratio: 0.0,
                sliding: false,
                pristine: true,
            }
        );
        assert_eq!(slider.revision(), 0);
    }

    #[test]
    fn config_builder_and_clamping() {
        let slider = SliderController::new(
            SliderConfig::new()
                .with_axis(Axis::Vertical)
                .with_initial_ratio(4.0),
        );
        assert_eq!(slider.axis(), Axis::Vertical);
        assert_eq!(slider.ratio(), 1.0);
    }

    #[test]
    fn revision_bumps_only_on_observable_change() {
        let mut slider = SliderController::new(SliderConfig::new().with_initial_ratio(0.5));

        // Redundant explicit update.
        let t = slider.set_explicit_ratio(0.5);
        assert!(!t.changed());
        assert_eq!(slider.revision(), 0);

        // Stray move.
        slider.drag_move(10.0);
        assert_eq!(slider.revision(), 0);

        slider.drag_start(0.0, 100.0);
        assert_eq!(slider.revision(), 1);

        // Zero-length move is accepted but not observable.
        slider.drag_move(0.0);
        assert_eq!(slider.revision(), 1);

        slider.drag_move(10.0);
        assert_eq!(slider.revision(), 2);
    }

    #[test]
    fn transition_flags() {
        let mut slider = SliderController::new(SliderConfig::new().with_initial_ratio(0.5));

        let t = slider.drag_start(50.0, 100.0);
        assert!(t.drag_started());
        assert!(!t.ratio_changed());
        assert!(!t.committed());

        let t = slider.drag_move(60.0);
        assert!(t.ratio_changed());
        assert!(!t.committed());

        let t = slider.drag_end(60.0);
        assert!(t.drag_ended());
        assert!(t.committed());

        let t = slider.set_explicit_ratio(0.2);
        assert!(t.ratio_changed());
        assert!(!t.committed());

        let t = slider.jump_to_position(90.0, 100.0);
        assert!(t.committed());
    }

    #[test]
    fn trace_receives_applied_and_ignored() {
        let mut slider = SliderController::default();
        let mut log = TraceLog::new();

        slider.apply_with_trace(SliderAction::DragMove { coord: 3.0 }, &mut log);
        slider.apply_with_trace(
            SliderAction::DragStart {
                coord: 0.0,
                extent: 0.0,
            },
            &mut log,
        );
        slider.apply_with_trace(
            SliderAction::JumpToPosition {
                coord: 50.0,
                extent: 100.0,
            },
            &mut log,
        );

        let reasons: alloc::vec::Vec<_> = log.ignored().collect();
        assert_eq!(reasons, [Ignored::NotSliding, Ignored::InvalidExtent]);
        match log.entries()[2] {
            TraceEntry::Applied { after, .. } => assert_eq!(after.ratio(), 0.5),
            TraceEntry::Ignored { .. } => panic!("jump should apply"),
        }
    }
}
