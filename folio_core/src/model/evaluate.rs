// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Model evaluation and change tracking.
//!
//! Evaluation follows a drain-compare pattern for each dirty channel:
//!
//! 1. **ACTIVE**: Drain dirty section nodes and compare each section's
//!    active flag against what was last presented.
//! 2. **REVEAL**: Drain dirty nodes including dependents, so a section
//!    marked by a re-arm yields all of its items. Compare each item's
//!    revealed flag against what was last presented.
//! 3. **FAQ**: Drain dirty entries and compare their open flag.
//! 4. **Header**: Compare the header state against what was last presented.
//!
//! Only entries whose presented state actually differs are reported, so a
//! section that was deactivated and re-activated within one turn produces no
//! change at all.
//!
//! [`ViewChanges`] uses raw slot indices (`u32`) so that backends can index
//! their element tables directly.

use alloc::vec::Vec;

use super::store::{Node, SiteModel};
use crate::dirty;
use crate::header::HeaderState;

/// The set of changes produced by a single [`SiteModel::evaluate`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewChanges {
    /// Sections that became active.
    pub activated: Vec<u32>,
    /// Sections that became inactive.
    pub deactivated: Vec<u32>,
    /// Items whose revealed flag was set.
    pub revealed: Vec<u32>,
    /// Items whose revealed flag was cleared.
    pub concealed: Vec<u32>,
    /// FAQ entries that were opened.
    pub faq_opened: Vec<u32>,
    /// FAQ entries that were closed.
    pub faq_closed: Vec<u32>,
    /// New header state, if it changed.
    pub header: Option<HeaderState>,
}

impl ViewChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.activated.clear();
        self.deactivated.clear();
        self.revealed.clear();
        self.concealed.clear();
        self.faq_opened.clear();
        self.faq_closed.clear();
        self.header = None;
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty()
            && self.deactivated.is_empty()
            && self.revealed.is_empty()
            && self.concealed.is_empty()
            && self.faq_opened.is_empty()
            && self.faq_closed.is_empty()
            && self.header.is_none()
    }
}

impl SiteModel {
    /// Drains all dirty channels and returns what changed since the previous
    /// evaluation.
    ///
    /// The first call after construction reports every declared section,
    /// item, and FAQ entry, plus the header, so a backend can normalise the
    /// classes the document shipped with.
    pub fn evaluate(&mut self) -> ViewChanges {
        let mut changes = ViewChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer.
    pub fn evaluate_into(&mut self, changes: &mut ViewChanges) {
        changes.clear();

        // Drain ACTIVE channel.
        let dirty_active: Vec<u32> = self
            .dirty
            .drain(dirty::ACTIVE)
            .deterministic()
            .run()
            .collect();
        for node in dirty_active {
            let Node::Section(idx) = self.nodes[node as usize] else {
                continue;
            };
            let want = self.active == Some(idx);
            let shown = &mut self.shown_active[idx as usize];
            if *shown != Some(want) {
                *shown = Some(want);
                if want {
                    changes.activated.push(idx);
                } else {
                    changes.deactivated.push(idx);
                }
            }
        }

        // Drain REVEAL channel, including items reached through their section.
        let dirty_reveal: Vec<u32> = self
            .dirty
            .drain(dirty::REVEAL)
            .affected()
            .deterministic()
            .run()
            .collect();
        for node in dirty_reveal {
            let Node::Item(idx) = self.nodes[node as usize] else {
                continue;
            };
            let want = self.revealed[idx as usize];
            let shown = &mut self.shown_revealed[idx as usize];
            if *shown != Some(want) {
                *shown = Some(want);
                if want {
                    changes.revealed.push(idx);
                } else {
                    changes.concealed.push(idx);
                }
            }
        }

        // Drain FAQ channel.
        let dirty_faq: Vec<u32> = self
            .dirty
            .drain(dirty::FAQ)
            .deterministic()
            .run()
            .collect();
        for node in dirty_faq {
            let Node::Faq(idx) = self.nodes[node as usize] else {
                continue;
            };
            let want = self.faq_open[idx as usize];
            let shown = &mut self.shown_faq[idx as usize];
            if *shown != Some(want) {
                *shown = Some(want);
                if want {
                    changes.faq_opened.push(idx);
                } else {
                    changes.faq_closed.push(idx);
                }
            }
        }

        if self.header_dirty {
            self.header_dirty = false;
            if self.shown_header != Some(self.header) {
                self.shown_header = Some(self.header);
                changes.header = Some(self.header);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::model::{ItemId, SectionId};

    fn site() -> (SiteModel, SectionId, SectionId, ItemId, ItemId) {
        let mut model = SiteModel::new();
        let home = model.add_section("home").unwrap();
        let about = model.add_section("about").unwrap();
        let a = model.add_item(home);
        let b = model.add_item(about);
        (model, home, about, a, b)
    }

    #[test]
    fn first_evaluate_reports_everything() {
        let (mut model, home, _, _, _) = site();
        model.add_faq();
        model.deactivate_all();
        model.activate(home);

        let changes = model.evaluate();
        assert_eq!(changes.activated, vec![0]);
        assert_eq!(changes.deactivated, vec![1]);
        assert_eq!(changes.concealed, vec![0, 1]);
        assert!(changes.revealed.is_empty());
        assert_eq!(changes.faq_closed, vec![0]);
        assert_eq!(changes.header, Some(HeaderState::VisibleUnshadowed));
    }

    #[test]
    fn second_evaluate_is_empty() {
        let (mut model, home, _, _, _) = site();
        model.activate(home);
        let _ = model.evaluate();
        assert!(model.evaluate().is_empty());
    }

    #[test]
    fn switching_reports_only_the_pair() {
        let (mut model, home, about, _, _) = site();
        model.activate(home);
        let _ = model.evaluate();

        model.deactivate_all();
        model.activate(about);
        let changes = model.evaluate();
        assert_eq!(changes.activated, vec![1]);
        assert_eq!(changes.deactivated, vec![0]);
    }

    #[test]
    fn reactivating_the_same_section_is_a_no_op() {
        let (mut model, home, _, _, _) = site();
        model.activate(home);
        let _ = model.evaluate();

        model.deactivate_all();
        model.activate(home);
        assert!(model.evaluate().is_empty());
    }

    #[test]
    fn conceal_section_reaches_items_through_dependency() {
        let (mut model, home, _, a, _) = site();
        model.activate(home);
        model.set_revealed(a, true);
        let changes = model.evaluate();
        assert_eq!(changes.revealed, vec![a.index()]);

        model.conceal_section(home);
        let changes = model.evaluate();
        assert_eq!(changes.concealed, vec![a.index()]);
        assert!(changes.revealed.is_empty());
    }

    #[test]
    fn header_change_is_reported_once() {
        let (mut model, _, _, _, _) = site();
        let _ = model.evaluate();

        model.set_header(HeaderState::Hidden);
        assert_eq!(model.evaluate().header, Some(HeaderState::Hidden));
        assert_eq!(model.evaluate().header, None);
    }

    #[test]
    fn faq_toggle_round_trip_within_one_turn_is_silent() {
        let (mut model, _, _, _, _) = site();
        let faq = model.add_faq();
        let _ = model.evaluate();

        model.set_faq_open(faq, true);
        model.set_faq_open(faq, false);
        assert!(model.evaluate().faq_opened.is_empty());
    }
}
