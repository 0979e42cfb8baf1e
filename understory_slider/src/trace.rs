// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for slider transitions.
//!
//! [`SliderController`](crate::SliderController) never surfaces errors to the
//! host. When an embedder wants to know what happened to each action (for
//! debugging dropped pointer events, say), it can attach a [`SliderTrace`] sink.
//!
//! With the `tracing` feature enabled the controller additionally emits
//! `tracing` events; the sink works without it.

use alloc::vec::Vec;

use crate::{Ignored, SliderAction, SliderState};

/// A callback sink for slider actions.
pub trait SliderTrace {
    /// Called after `action` was accepted, with the states on either side.
    fn applied(&mut self, action: &SliderAction, before: &SliderState, after: &SliderState);

    /// Called when `action` left the state untouched.
    fn ignored(&mut self, action: &SliderAction, state: &SliderState, reason: Ignored);
}

/// One recorded entry of a [`TraceLog`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TraceEntry {
    /// The action was accepted and produced `after`.
    Applied {
        /// The action that ran.
        action: SliderAction,
        /// The resulting state.
        after: SliderState,
    },
    /// The action was ignored.
    Ignored {
        /// The action that was dropped.
        action: SliderAction,
        /// Why it was dropped.
        reason: Ignored,
    },
}

/// Records every traced action in order.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Iterates over the reasons of ignored actions, oldest first.
    pub fn ignored(&self) -> impl Iterator<Item = Ignored> + '_ {
        self.entries.iter().filter_map(|e| match e {
            TraceEntry::Ignored { reason, .. } => Some(*reason),
            TraceEntry::Applied { .. } => None,
        })
    }

    /// Clears all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl SliderTrace for TraceLog {
    fn applied(&mut self, action: &SliderAction, _before: &SliderState, after: &SliderState) {
        self.entries.push(TraceEntry::Applied {
            action: *action,
            after: *after,
        });
    }

    fn ignored(&mut self, action: &SliderAction, _state: &SliderState, reason: Ignored) {
        self.entries.push(TraceEntry::Ignored {
            action: *action,
            reason,
        });
    }
}
