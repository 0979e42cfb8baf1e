// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global pointer hub: process-wide move/up listeners with scoped subscriptions.
//!
//! Once the thumb is pressed, a slider has to keep tracking the pointer even
//! after it leaves the widget. Hosts usually solve this with document- or
//! window-level listeners. [`PointerHub`] models that shared event source:
//!
//! - The host forwards every pointer move and release to the hub.
//! - Each live widget holds one [`Subscription`]; dropping it unsubscribes.
//! - Events reach listeners in subscription order.
//!
//! The hub is single-threaded and cheap to clone; clones share the same
//! listener set.
//!
//! ## Minimal example
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_slider::pointer::PointerHub;
//!
//! let hub = PointerHub::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let sub = {
//!     let seen = seen.clone();
//!     hub.subscribe(move |_| seen.set(seen.get() + 1))
//! };
//! assert_eq!(hub.pointer_move(Point::new(1.0, 2.0)), 1);
//!
//! drop(sub);
//! assert_eq!(hub.pointer_up(Point::new(1.0, 2.0)), 0);
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::Point;

/// A pointer event delivered to every subscriber regardless of hit testing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GlobalPointerEvent {
    /// The pointer moved to the given page/window position.
    Move(Point),
    /// The pointer was released at the given page/window position.
    Up(Point),
}

impl GlobalPointerEvent {
    /// The page/window position carried by the event.
    #[must_use]
    pub fn position(&self) -> Point {
        match *self {
            Self::Move(pos) | Self::Up(pos) => pos,
        }
    }
}

/// Identifies one subscription on a [`PointerHub`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&GlobalPointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, Listener>,
}

/// Shared source of global pointer move/up events.
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

impl PointerHub {
    /// Creates a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` for all future events.
    ///
    /// The listener stays registered until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&GlobalPointerEvent) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.insert(id, Rc::new(listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener, returning how many were called.
    ///
    /// The listener set is captured before the first call, so listeners may
    /// subscribe or drop subscriptions while handling the event. Such changes
    /// take effect from the next dispatch.
    pub fn dispatch(&self, event: GlobalPointerEvent) -> usize {
        let listeners: Vec<Listener> =
            self.registry.borrow().listeners.values().cloned().collect();
        for listener in &listeners {
            listener(&event);
        }
        listeners.len()
    }

    /// Shorthand for dispatching [`GlobalPointerEvent::Move`].
    pub fn pointer_move(&self, pos: Point) -> usize {
        self.dispatch(GlobalPointerEvent::Move(pos))
    }

    /// Shorthand for dispatching [`GlobalPointerEvent::Up`].
    pub fn pointer_up(&self, pos: Point) -> usize {
        self.dispatch(GlobalPointerEvent::Up(pos))
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Returns `true` if `id` is still subscribed to this hub.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.registry.borrow().listeners.contains_key(&id)
    }
}

/// Scoped registration on a [`PointerHub`]. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl Subscription {
    /// This subscription's identifier.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns `true` while the hub is alive and still holds this listener.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().listeners.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The hub may already be gone; then there is nothing to release.
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}
