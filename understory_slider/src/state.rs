// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider state machine: a pure reducer over [`SliderState`].
//!
//! ## Usage
//!
//! 1) Create a state with [`SliderState::new`] (or from a [`SliderConfig`](crate::SliderConfig)).
//! 2) On a thumb press, call [`SliderState::drag_start`] with the projected pointer coordinate
//!    and the current track extent.
//! 3) On every global pointer move, call [`SliderState::drag_move`]; on release, [`SliderState::drag_end`].
//! 4) On a track press, call [`SliderState::jump_to_position`] with the track-local offset.
//! 5) When the application sets the value, call [`SliderState::set_explicit_ratio`].
//!
//! Every action takes the state by value and returns the next state. Actions never fail:
//! degenerate input leaves the state unchanged. Use [`SliderState::try_reduce`] to learn
//! *why* an action was ignored.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::{Axis, SliderState};
//!
//! let state = SliderState::new(Axis::Horizontal, 0.5);
//!
//! // Press the thumb at x = 50 on a 100px track, then drag right by 20px.
//! let state = state.drag_start(50.0, 100.0);
//! assert!(state.is_sliding());
//! let state = state.drag_move(70.0);
//! assert!((state.ratio() - 0.7).abs() < 1e-9);
//!
//! // Release. Later stray moves are ignored.
//! let state = state.drag_end(70.0);
//! assert!(!state.is_sliding());
//! assert_eq!(state.drag_move(0.0), state);
//! ```

use core::fmt;

use crate::Axis;

/// Bookkeeping for an in-progress drag.
#[derive(Copy, Clone, Debug, PartialEq)]
struct DragSession {
    /// Projected pointer coordinate at drag start or at the last processed move.
    last_coord: f64,
    /// Track extent along the axis, captured at drag start. Always finite and positive.
    slide_range: f64,
}

/// The complete interaction state of one slider.
///
/// `SliderState` is a small `Copy` value. Transitions take `self` and return the
/// next state, so callers can keep the previous value around for comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderState {
    axis: Axis,
    ratio: f64,
    pristine: bool,
    drag: Option<DragSession>,
}

/// A single input to the slider state machine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderAction {
    /// The application set the value.
    SetExplicitRatio {
        /// Requested ratio; clamped into `[0, 1]`.
        ratio: f64,
    },
    /// The pointer was pressed on the thumb.
    DragStart {
        /// Projected pointer coordinate (see [`Axis::project`]).
        coord: f64,
        /// Track length along the axis, measured at press time.
        extent: f64,
    },
    /// The pointer moved anywhere while the slider may be dragging.
    DragMove {
        /// Projected pointer coordinate.
        coord: f64,
    },
    /// The pointer was released anywhere.
    DragEnd {
        /// Projected pointer coordinate.
        coord: f64,
    },
    /// The pointer was pressed on the track, away from the thumb.
    JumpToPosition {
        /// Track-local offset along the axis (see [`Axis::local`]).
        coord: f64,
        /// Track length along the axis, measured at press time.
        extent: f64,
    },
}

/// Why an action left the state untouched.
///
/// These are not errors surfaced to the host; they are diagnostics returned by
/// [`SliderState::try_reduce`] and forwarded to [`SliderTrace`](crate::SliderTrace).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ignored {
    /// A move or release arrived while no drag was in progress.
    NotSliding,
    /// The ratio was already set explicitly to the same value.
    Redundant,
    /// The track extent was zero, negative, or not finite.
    InvalidExtent,
    /// A ratio or coordinate was NaN or (for coordinates) infinite.
    NonFinite,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NotSliding => "pointer event ignored: no drag in progress",
            Self::Redundant => "explicit ratio already applied",
            Self::InvalidExtent => "track extent must be finite and positive",
            Self::NonFinite => "input value is not finite",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Ignored {}

impl SliderState {
    /// Creates an idle, pristine state.
    ///
    /// `ratio` is clamped into `[0, 1]`; NaN becomes `0.0`.
    #[must_use]
    pub fn new(axis: Axis, ratio: f64) -> Self {
        Self {
            axis,
            ratio: if ratio.is_nan() { 0.0 } else { clamp(ratio) },
            pristine: true,
            drag: None,
        }
    }

    /// The axis this slider measures along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The current ratio, always in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Returns `true` when the ratio was last set by
    /// [`set_explicit_ratio`](Self::set_explicit_ratio) rather than by the user.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.pristine
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.drag.is_some()
    }

    /// The last processed drag coordinate, if dragging.
    #[must_use]
    pub fn last_coord(&self) -> Option<f64> {
        self.drag.map(|d| d.last_coord)
    }

    /// The track extent captured at drag start, if dragging.
    #[must_use]
    pub fn slide_range(&self) -> Option<f64> {
        self.drag.map(|d| d.slide_range)
    }

    /// Sets the ratio on behalf of the application and marks the state pristine.
    ///
    /// When the state is already pristine and `ratio` equals the current value,
    /// this is a no-op. When the state is *not* pristine the update always
    /// applies, even if the value is unchanged, so a restore after a drag wins.
    #[must_use]
    pub fn set_explicit_ratio(self, ratio: f64) -> Self {
        self.reduce(SliderAction::SetExplicitRatio { ratio })
    }

    /// Begins a drag at the projected pointer coordinate `coord`.
    ///
    /// `extent` is the track length along the axis; a non-positive or
    /// non-finite extent ignores the press entirely.
    #[must_use]
    pub fn drag_start(self, coord: f64, extent: f64) -> Self {
        self.reduce(SliderAction::DragStart { coord, extent })
    }

    /// Applies pointer motion to the ratio. Ignored while idle.
    #[must_use]
    pub fn drag_move(self, coord: f64) -> Self {
        self.reduce(SliderAction::DragMove { coord })
    }

    /// Applies the final pointer motion and ends the drag. Ignored while idle.
    #[must_use]
    pub fn drag_end(self, coord: f64) -> Self {
        self.reduce(SliderAction::DragEnd { coord })
    }

    /// Moves the ratio to an absolute position on the track and ends any drag.
    ///
    /// `coord` is the offset from the track's top-left corner along the axis.
    /// The vertical axis is inverted so that the top of the track is `1.0`.
    #[must_use]
    pub fn jump_to_position(self, coord: f64, extent: f64) -> Self {
        self.reduce(SliderAction::JumpToPosition { coord, extent })
    }

    /// Applies `action`, returning the unchanged state if it is ignored.
    #[must_use]
    pub fn reduce(self, action: SliderAction) -> Self {
        self.try_reduce(action).unwrap_or(self)
    }

    /// Applies `action`, reporting why it was ignored.
    ///
    /// `Ok` means the action was accepted; the returned state may still compare
    /// equal to `self` (for example, a drag move of zero pixels).
    pub fn try_reduce(self, action: SliderAction) -> Result<Self, Ignored> {
        match action {
            SliderAction::SetExplicitRatio { ratio } => {
                if ratio.is_nan() {
                    return Err(Ignored::NonFinite);
                }
                if self.pristine && ratio == self.ratio {
                    return Err(Ignored::Redundant);
                }
                Ok(Self {
                    ratio: clamp(ratio),
                    pristine: true,
                    ..self
                })
            }
            SliderAction::DragStart { coord, extent } => {
                check_extent(extent)?;
                check_coord(coord)?;
                Ok(Self {
                    pristine: false,
                    drag: Some(DragSession {
                        last_coord: coord,
                        slide_range: extent,
                    }),
                    ..self
                })
            }
            SliderAction::DragMove { coord } => {
                let drag = self.drag.ok_or(Ignored::NotSliding)?;
                check_coord(coord)?;
                Ok(Self {
                    ratio: step(self.ratio, drag, coord),
                    pristine: false,
                    drag: Some(DragSession {
                        last_coord: coord,
                        ..drag
                    }),
                    ..self
                })
            }
            SliderAction::DragEnd { coord } => {
                let drag = self.drag.ok_or(Ignored::NotSliding)?;
                // A release must always end the drag; a bad coordinate only
                // forfeits the last bit of motion.
                let ratio = if coord.is_finite() {
                    step(self.ratio, drag, coord)
                } else {
                    self.ratio
                };
                Ok(Self {
                    ratio,
                    pristine: false,
                    drag: None,
                    ..self
                })
            }
            SliderAction::JumpToPosition { coord, extent } => {
                check_extent(extent)?;
                check_coord(coord)?;
                let ratio = match self.axis {
                    Axis::Horizontal => coord / extent,
                    Axis::Vertical => (extent - coord) / extent,
                };
                Ok(Self {
                    ratio: clamp(ratio),
                    pristine: false,
                    drag: None,
                    ..self
                })
            }
        }
    }
}

fn clamp(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0)
}

fn step(ratio: f64, drag: DragSession, coord: f64) -> f64 {
    let delta = coord - drag.last_coord;
    clamp(ratio + delta / drag.slide_range)
}

fn check_extent(extent: f64) -> Result<(), Ignored> {
    if extent.is_finite() && extent > 0.0 {
        Ok(())
    } else {
        Err(Ignored::InvalidExtent)
    }
}

fn check_coord(coord: f64) -> Result<(), Ignored> {
    if coord.is_finite() {
        Ok(())
    } else {
        Err(Ignored::NonFinite)
    }
}
