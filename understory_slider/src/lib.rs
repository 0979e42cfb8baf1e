// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: headless interaction state for slider controls.
//!
//! A slider holds a normalized ratio in `[0, 1]` that the user changes by
//! dragging a thumb or clicking the track, and the application changes by
//! setting it directly. This crate implements the interaction logic only:
//! turning a stream of pointer presses, moves, and releases (possibly
//! interleaved with programmatic updates) into a consistent ratio.
//!
//! It does **not** draw anything or perform hit testing. Callers are expected to:
//! - Decide whether a press landed on the thumb or on the track.
//! - Measure the track at press time.
//! - Forward pointer moves and releases from anywhere in the window, so a
//!   drag keeps working after the pointer leaves the slider.
//!
//! ## Layers
//!
//! - [`SliderState`]: a `Copy` value with a pure reducer. Each action takes the
//!   state and returns the next one; invalid input leaves it unchanged.
//! - [`SliderController`]: owns a state, applies actions in place, and reports
//!   a [`Transition`] plus a revision counter.
//! - [`Slider`]: per-instance glue that binds a controller to a shared
//!   [`pointer::PointerHub`] through a scoped subscription.
//!
//! ## Semantics
//!
//! - Dragging is *incremental*: each move adds `delta / track_extent` to the
//!   ratio, so the pointer may leave the track without the value snapping.
//! - Clicking the track is *absolute*: the ratio becomes the click offset
//!   divided by the track extent. On a vertical slider the top of the track
//!   is `1.0`.
//! - Moves and releases with no drag in progress are ignored.
//! - The **pristine** flag records provenance. It is `true` when the
//!   application set the value, and `false` after any drag or click. Setting
//!   the same explicit value twice in a row is a no-op; after user
//!   interaction an explicit update always applies.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_slider::{SliderConfig, SliderController};
//!
//! let mut slider = SliderController::new(SliderConfig::new().with_initial_ratio(0.5));
//!
//! // Thumb pressed at x = 50 on a 100px track, dragged right, then left.
//! slider.drag_start(50.0, 100.0);
//! slider.drag_move(70.0);
//! assert!((slider.ratio() - 0.7).abs() < 1e-9);
//! slider.drag_move(30.0);
//! assert!((slider.ratio() - 0.3).abs() < 1e-9);
//! slider.drag_end(30.0);
//!
//! // Click a quarter of the way along the track.
//! slider.jump_to_position(25.0, 100.0);
//! assert_eq!(slider.ratio(), 0.25);
//!
//! // The application restores a saved value.
//! slider.set_explicit_ratio(0.9);
//! assert!(slider.snapshot().pristine);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `tracing`: emit `tracing` events for applied and ignored actions.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod axis;
mod controller;
mod state;
mod widget;

pub mod pointer;
pub mod trace;

pub use axis::Axis;
pub use controller::{SliderConfig, SliderController, SliderSnapshot, Transition};
pub use state::{Ignored, SliderAction, SliderState};
pub use trace::SliderTrace;
pub use widget::Slider;
