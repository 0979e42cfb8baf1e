// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider widget glue: wires presses and global pointer events to a controller.
//!
//! [`Slider`] is the piece a host embeds per slider instance. It owns a
//! [`SliderController`] and one [`Subscription`] on a shared [`PointerHub`].
//! The host is responsible for hit testing:
//!
//! - Press on the thumb: [`Slider::press_thumb`] with the page position.
//! - Press on the track: [`Slider::press_track`] with the track-local offset.
//! - Every pointer move/release anywhere: forward to the [`PointerHub`].
//!
//! Track sizes are passed on every press and never cached, since layout may
//! change between gestures.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_slider::pointer::PointerHub;
//! use understory_slider::{Slider, SliderConfig};
//!
//! let hub = PointerHub::new();
//! let mut slider = Slider::new(SliderConfig::new().with_initial_ratio(0.5), &hub);
//! let track = Size::new(100.0, 8.0);
//!
//! slider.press_thumb(Point::new(150.0, 20.0), track);
//! // The pointer wanders off the widget; the drag keeps tracking.
//! hub.pointer_move(Point::new(170.0, 300.0));
//! hub.pointer_up(Point::new(170.0, 300.0));
//!
//! let snap = slider.snapshot();
//! assert!((snap.ratio - 0.7).abs() < 1e-9);
//! assert!(!snap.sliding);
//!
//! drop(slider);
//! assert_eq!(hub.listener_count(), 0);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::{Point, Size};

use crate::pointer::{GlobalPointerEvent, PointerHub, Subscription, SubscriptionId};
use crate::{Axis, SliderConfig, SliderController, SliderSnapshot, SliderState, Transition};

/// One slider instance bound to a [`PointerHub`].
///
/// Dropping the slider releases its hub subscription.
#[derive(Debug)]
pub struct Slider {
    controller: Rc<RefCell<SliderController>>,
    subscription: Subscription,
}

impl Slider {
    /// Creates a slider and subscribes it to `hub`'s global move/up events.
    pub fn new(config: SliderConfig, hub: &PointerHub) -> Self {
        let controller = Rc::new(RefCell::new(SliderController::new(config)));
        let weak = Rc::downgrade(&controller);
        let subscription = hub.subscribe(move |event| {
            // Late events after teardown find no controller.
            let Some(cell) = weak.upgrade() else {
                return;
            };
            let Ok(mut controller) = cell.try_borrow_mut() else {
                #[cfg(feature = "tracing")]
                tracing::warn!(?event, "reentrant pointer event dropped");
                return;
            };
            let coord = controller.axis().project(event.position());
            match event {
                GlobalPointerEvent::Move(_) => controller.drag_move(coord),
                GlobalPointerEvent::Up(_) => controller.drag_end(coord),
            };
        });
        Self {
            controller,
            subscription,
        }
    }

    /// Handles a press on the thumb at page position `pos`.
    pub fn press_thumb(&mut self, pos: Point, track: Size) -> Transition {
        let mut controller = self.controller.borrow_mut();
        let axis = controller.axis();
        controller.drag_start(axis.project(pos), axis.extent(track))
    }

    /// Handles a press on the track at `offset` from the track's top-left corner.
    pub fn press_track(&mut self, offset: Point, track: Size) -> Transition {
        let mut controller = self.controller.borrow_mut();
        let axis = controller.axis();
        controller.jump_to_position(axis.local(offset), axis.extent(track))
    }

    /// Sets the ratio on behalf of the application.
    pub fn set_explicit_ratio(&mut self, ratio: f64) -> Transition {
        self.controller.borrow_mut().set_explicit_ratio(ratio)
    }

    /// Returns the host-visible state.
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        self.controller.borrow().snapshot()
    }

    /// Returns a copy of the full state.
    #[must_use]
    pub fn state(&self) -> SliderState {
        *self.controller.borrow().state()
    }

    /// Current ratio.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.controller.borrow().ratio()
    }

    /// The axis this slider measures along.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.controller.borrow().axis()
    }

    /// Counter that increases whenever the snapshot changes, including from
    /// events delivered through the hub.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.controller.borrow().revision()
    }

    /// Identifier of this slider's hub subscription.
    #[must_use]
    pub fn subscription_id(&self) -> SubscriptionId {
        self.subscription.id()
    }
}
