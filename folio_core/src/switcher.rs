// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase section switching.
//!
//! A user-triggered switch is split so that the activation class change is
//! rendered before anything that depends on it:
//!
//! 1. [`PageSwitcher::begin`] runs synchronously in the event handler. It
//!    validates the key, deactivates every section, activates the target,
//!    and conceals the target's items. It returns a [`PendingSwitch`].
//! 2. [`PageSwitcher::finish`] runs at the next rendering opportunity. It
//!    re-arms reveal tracking and returns a [`Commit`] telling the backend to
//!    push a history entry and scroll to the origin.
//!
//! Only the most recent pending switch can finish. Starting another switch,
//! or activating directly, supersedes it.
//!
//! Startup and history restoration use [`PageSwitcher::activate_now`], which
//! applies both phases at once.

use alloc::string::{String, ToString};

use crate::error::NavError;
use crate::fragment;
use crate::model::{SectionId, SiteModel};
use crate::reveal::{Rearm, RevealObserver};

/// A write to the browser's session history.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HistoryOp {
    /// Add a new entry for this section key.
    Push(String),
    /// Overwrite the current entry with this section key.
    Replace(String),
}

impl HistoryOp {
    /// Returns the section key recorded by this operation.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Push(key) | Self::Replace(key) => key,
        }
    }

    /// Returns the URL fragment (`#<key>`) to record.
    #[must_use]
    pub fn hash(&self) -> String {
        fragment::to_hash(self.key())
    }
}

/// Token for a switch whose first phase has been applied.
///
/// Pass it to [`PageSwitcher::finish`] at the next rendering opportunity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a pending switch does nothing until it is finished"]
pub struct PendingSwitch {
    section: SectionId,
    generation: u64,
}

impl PendingSwitch {
    /// Returns the section being switched to.
    #[must_use]
    pub const fn section(&self) -> SectionId {
        self.section
    }
}

/// Side effects a backend applies once an activation has been committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// The newly active section.
    pub section: SectionId,
    /// History write to perform, if any.
    pub history: Option<HistoryOp>,
    /// Whether to scroll the viewport back to the origin.
    pub scroll_to_origin: bool,
    /// Watch list for the reveal observer.
    pub rearm: Rearm,
}

/// Applies section activations to a [`SiteModel`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PageSwitcher {
    generation: u64,
    pending: Option<u64>,
}

impl PageSwitcher {
    /// Creates a switcher with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Returns `true` if a switch is waiting for its second phase.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies the first phase of a switch to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownSection`] if `key` names no section. The
    /// model is left untouched and any earlier pending switch stays valid.
    pub fn begin(&mut self, model: &mut SiteModel, key: &str) -> Result<PendingSwitch, NavError> {
        let section = model.resolve(key)?;

        model.deactivate_all();
        model.activate(section);
        model.conceal_section(section);

        self.generation += 1;
        self.pending = Some(self.generation);
        Ok(PendingSwitch {
            section,
            generation: self.generation,
        })
    }

    /// Applies the second phase of `pending`.
    ///
    /// Returns `None` if the switch was superseded since it began.
    pub fn finish(
        &mut self,
        model: &mut SiteModel,
        reveal: &mut RevealObserver,
        pending: PendingSwitch,
    ) -> Option<Commit> {
        if self.pending != Some(pending.generation) {
            return None;
        }
        self.pending = None;

        let rearm = reveal.rearm(model, pending.section);
        Some(Commit {
            section: pending.section,
            history: Some(HistoryOp::Push(model.key(pending.section).to_string())),
            scroll_to_origin: true,
            rearm,
        })
    }

    /// Activates `section` immediately, without a deferred phase.
    ///
    /// Any pending switch is superseded. `history` is passed through to the
    /// returned [`Commit`]; the viewport is not scrolled.
    pub fn activate_now(
        &mut self,
        model: &mut SiteModel,
        reveal: &mut RevealObserver,
        section: SectionId,
        history: Option<HistoryOp>,
    ) -> Commit {
        self.pending = None;
        model.deactivate_all();
        model.activate(section);
        let rearm = reveal.rearm(model, section);
        Commit {
            section,
            history,
            scroll_to_origin: false,
            rearm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn site() -> (SiteModel, RevealObserver, SectionId, SectionId, ItemId) {
        let mut model = SiteModel::new();
        let home = model.add_section("home").unwrap();
        let about = model.add_section("about").unwrap();
        model.add_item(home);
        let card = model.add_item(about);
        let reveal = RevealObserver::new(model.item_count(), 0.1);
        (model, reveal, home, about, card)
    }

    #[test]
    fn begin_applies_visibility_immediately() {
        let (mut model, mut reveal, home, about, _) = site();
        switcher_start(&mut model, &mut reveal, home);

        let mut sw = PageSwitcher::new();
        let pending = sw.begin(&mut model, "about").unwrap();
        assert_eq!(pending.section(), about);
        assert!(model.is_active(about));
        assert!(!model.is_active(home));
        assert!(sw.has_pending());
        // Observation is only re-armed in the second phase.
        assert_eq!(reveal.watch_count(), 1);
    }

    #[test]
    fn finish_pushes_history_and_rearms() {
        let (mut model, mut reveal, _, about, card) = site();
        let mut sw = PageSwitcher::new();
        let pending = sw.begin(&mut model, "about").unwrap();

        let commit = sw.finish(&mut model, &mut reveal, pending).unwrap();
        assert_eq!(commit.section, about);
        assert_eq!(commit.history, Some(HistoryOp::Push("about".to_string())));
        assert!(commit.scroll_to_origin);
        assert_eq!(commit.rearm.watch, [card.index()]);
        assert!(!sw.has_pending());
    }

    #[test]
    fn unknown_key_mutates_nothing() {
        let (mut model, mut reveal, home, _, _) = site();
        switcher_start(&mut model, &mut reveal, home);
        let _ = model.evaluate();

        let mut sw = PageSwitcher::new();
        assert_eq!(
            sw.begin(&mut model, "bogus"),
            Err(NavError::UnknownSection("bogus".to_string()))
        );
        assert!(model.is_active(home));
        assert!(model.evaluate().is_empty());
        assert!(!sw.has_pending());
    }

    #[test]
    fn newer_switch_supersedes_pending() {
        let (mut model, mut reveal, home, _, _) = site();
        let mut sw = PageSwitcher::new();
        let first = sw.begin(&mut model, "about").unwrap();
        let second = sw.begin(&mut model, "home").unwrap();

        assert_eq!(sw.finish(&mut model, &mut reveal, first), None);
        let commit = sw.finish(&mut model, &mut reveal, second).unwrap();
        assert_eq!(commit.section, home);
        assert!(model.is_active(home));
    }

    #[test]
    fn direct_activation_cancels_pending() {
        let (mut model, mut reveal, home, _, _) = site();
        let mut sw = PageSwitcher::new();
        let pending = sw.begin(&mut model, "about").unwrap();

        let commit = sw.activate_now(&mut model, &mut reveal, home, None);
        assert_eq!(commit.history, None);
        assert!(!commit.scroll_to_origin);
        assert_eq!(sw.finish(&mut model, &mut reveal, pending), None);
        assert!(model.is_active(home));
    }

    #[test]
    fn history_op_fragment() {
        let op = HistoryOp::Replace("home".to_string());
        assert_eq!(op.key(), "home");
        assert_eq!(op.hash(), "#home");
    }

    fn switcher_start(model: &mut SiteModel, reveal: &mut RevealObserver, section: SectionId) {
        let mut sw = PageSwitcher::new();
        let _ = sw.activate_now(model, reveal, section, None);
    }
}
