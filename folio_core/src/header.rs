// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hide-on-scroll header state machine.
//!
//! The [`HeaderController`] consumes one vertical scroll offset per scroll
//! event and moves the header between three states:
//!
//! ```text
//!            scroll down past threshold
//!   Visible* ──────────────────────────► Hidden
//!      ▲                                   │
//!      └──────── scroll up / near top ─────┘
//! ```
//!
//! Within the visible states, the shadow is present whenever the offset is
//! above the threshold.

use crate::model::SiteModel;

/// Presentation state of the page header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderState {
    /// Shown without a shadow (near the top of the page).
    VisibleUnshadowed,
    /// Shown with a shadow (away from the top of the page).
    VisibleShadowed,
    /// Slid out of view while scrolling down.
    Hidden,
}

impl HeaderState {
    /// Returns `true` unless the header is hidden.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Returns `true` if the header carries its shadow.
    #[must_use]
    pub const fn is_shadowed(self) -> bool {
        matches!(self, Self::VisibleShadowed)
    }

    /// Computes the next state from the previous offset and the current one.
    ///
    /// `threshold` is the offset at or below which the header is always shown
    /// without a shadow.
    #[must_use]
    pub fn next(self, previous: f64, offset: f64, threshold: f64) -> Self {
        let mut state = self;
        if offset > previous && offset > threshold {
            state = Self::Hidden;
        } else if offset < previous {
            state = Self::VisibleShadowed;
        }

        if offset <= threshold {
            Self::VisibleUnshadowed
        } else if state == Self::Hidden {
            Self::Hidden
        } else {
            Self::VisibleShadowed
        }
    }
}

/// Tracks the last scroll offset and drives the header state in a
/// [`SiteModel`].
#[derive(Clone, Copy, Debug)]
pub struct HeaderController {
    threshold: f64,
    last_offset: f64,
}

impl HeaderController {
    /// Creates a controller with the given threshold and a previous offset of
    /// zero.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_offset: 0.0,
        }
    }

    /// Returns the offset observed by the last [`update`](Self::update).
    #[must_use]
    pub const fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Evaluates one scroll event and writes the resulting state to `model`.
    ///
    /// Returns the new state. The previous offset is replaced by `offset`
    /// whatever the outcome.
    pub fn update(&mut self, model: &mut SiteModel, offset: f64) -> HeaderState {
        let state = model
            .header()
            .next(self.last_offset, offset, self.threshold);
        model.set_header(state);
        self.last_offset = offset;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 70.0;

    fn drive(offsets: &[f64]) -> (SiteModel, HeaderController, HeaderState) {
        let mut model = SiteModel::new();
        let mut ctl = HeaderController::new(T);
        let mut state = model.header();
        for &offset in offsets {
            state = ctl.update(&mut model, offset);
        }
        (model, ctl, state)
    }

    #[test]
    fn shallow_scroll_stays_unshadowed() {
        let (_, _, state) = drive(&[0.0, 50.0]);
        assert_eq!(state, HeaderState::VisibleUnshadowed);
    }

    #[test]
    fn scrolling_down_past_threshold_hides() {
        let (model, ctl, state) = drive(&[0.0, 50.0, 100.0]);
        assert_eq!(state, HeaderState::Hidden);
        assert_eq!(model.header(), HeaderState::Hidden);
        assert_eq!(ctl.last_offset(), 100.0);
    }

    #[test]
    fn returning_near_top_forces_unshadowed() {
        let (_, _, state) = drive(&[0.0, 50.0, 100.0, 40.0]);
        assert_eq!(state, HeaderState::VisibleUnshadowed);
    }

    #[test]
    fn scrolling_up_far_from_top_shows_shadow() {
        let (_, _, state) = drive(&[300.0, 200.0]);
        assert_eq!(state, HeaderState::VisibleShadowed);
    }

    #[test]
    fn flat_offset_keeps_hidden() {
        let (_, _, state) = drive(&[100.0, 100.0]);
        assert_eq!(state, HeaderState::Hidden);
    }

    #[test]
    fn flat_offset_while_visible_adds_shadow() {
        // Down to 300 hides, up to 200 shows, staying at 200 keeps the shadow.
        let (_, _, state) = drive(&[300.0, 200.0, 200.0]);
        assert_eq!(state, HeaderState::VisibleShadowed);
    }

    #[test]
    fn startup_already_scrolled() {
        // The first evaluation compares against a previous offset of zero.
        let (_, _, state) = drive(&[500.0]);
        assert_eq!(state, HeaderState::Hidden);
    }

    #[test]
    fn threshold_itself_counts_as_near_top() {
        let (_, _, state) = drive(&[100.0, T]);
        assert_eq!(state, HeaderState::VisibleUnshadowed);
    }

    #[test]
    fn state_predicates() {
        assert!(HeaderState::VisibleShadowed.is_visible());
        assert!(HeaderState::VisibleShadowed.is_shadowed());
        assert!(!HeaderState::VisibleUnshadowed.is_shadowed());
        assert!(!HeaderState::Hidden.is_visible());
    }
}
