// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot reveal tracking.
//!
//! The [`RevealObserver`] mirrors the set of elements a backend's viewport
//! observer is watching. Each activation of a section *re-arms* it: every
//! watch is dropped, the section's items are concealed, and each item is
//! watched again. An item leaves the watch set the moment it is revealed.
//!
//! Intersections are checked against the model when they arrive, not when
//! the item was registered: a section can be switched away between the two,
//! and an item of an inactive section must never be revealed.

use alloc::vec::Vec;

use crate::model::{ItemId, SectionId, SiteModel};

/// The watch list a backend installs after a re-arm.
///
/// Backends drop every existing watch, then watch each item in
/// [`watch`](Self::watch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rearm {
    /// The section whose items are now watched.
    pub section: SectionId,
    /// Raw item indices to watch, in declaration order.
    pub watch: Vec<u32>,
}

/// What a backend should do with an element after an intersection report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    /// The item was revealed; stop watching it.
    Revealed,
    /// Nothing changed; keep watching.
    Ignored,
    /// The item is not watched (a stale report); stop watching it.
    Stale,
}

/// Tracks which items are currently watched for a reveal.
#[derive(Clone, Debug)]
pub struct RevealObserver {
    threshold: f64,
    watched: Vec<bool>,
    watch_count: usize,
}

impl RevealObserver {
    /// Creates an observer for a model with `item_count` items, revealing at
    /// intersection ratios of at least `threshold`.
    #[must_use]
    pub fn new(item_count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            watched: alloc::vec![false; item_count],
            watch_count: 0,
        }
    }

    /// Returns the intersection ratio threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns whether `item` is currently watched.
    #[must_use]
    pub fn is_watching(&self, item: ItemId) -> bool {
        self.watched
            .get(item.index() as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Returns the number of watched items.
    #[must_use]
    pub const fn watch_count(&self) -> usize {
        self.watch_count
    }

    /// Drops every watch, conceals the items of `section`, and watches each
    /// of them again.
    ///
    /// Calling this repeatedly for the same section leaves the same watch
    /// set as calling it once.
    pub fn rearm(&mut self, model: &mut SiteModel, section: SectionId) -> Rearm {
        self.watched.fill(false);
        self.watched.resize(model.item_count(), false);

        model.conceal_section(section);

        let watch: Vec<u32> = model.items(section).map(ItemId::index).collect();
        for &idx in &watch {
            self.watched[idx as usize] = true;
        }
        self.watch_count = watch.len();

        log::debug!(
            "rearmed {:?} ({}): watching {} item(s)",
            section,
            model.key(section),
            watch.len()
        );
        Rearm { section, watch }
    }

    /// Handles an intersection report for `item`.
    ///
    /// The item is revealed only if it is watched, intersecting at or above
    /// the threshold, and its section is active right now.
    pub fn intersect(
        &mut self,
        model: &mut SiteModel,
        item: ItemId,
        is_intersecting: bool,
        ratio: f64,
    ) -> Intersection {
        if !self.is_watching(item) {
            return Intersection::Stale;
        }
        if !is_intersecting || ratio < self.threshold {
            return Intersection::Ignored;
        }
        if !model.is_active(model.section_of(item)) {
            return Intersection::Ignored;
        }

        model.set_revealed(item, true);
        self.watched[item.index() as usize] = false;
        self.watch_count -= 1;
        Intersection::Revealed
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn site() -> (SiteModel, SectionId, SectionId, ItemId, ItemId, ItemId) {
        let mut model = SiteModel::new();
        let home = model.add_section("home").unwrap();
        let about = model.add_section("about").unwrap();
        let a = model.add_item(home);
        let b = model.add_item(home);
        let c = model.add_item(about);
        model.deactivate_all();
        model.activate(home);
        (model, home, about, a, b, c)
    }

    #[test]
    fn rearm_watches_section_items() {
        let (mut model, home, _, a, b, c) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);

        let rearm = obs.rearm(&mut model, home);
        assert_eq!(rearm.watch, vec![a.index(), b.index()]);
        assert!(obs.is_watching(a));
        assert!(obs.is_watching(b));
        assert!(!obs.is_watching(c));
        assert_eq!(obs.watch_count(), 2);
    }

    #[test]
    fn rearm_is_idempotent() {
        let (mut model, home, _, _, _, _) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);

        let first = obs.rearm(&mut model, home);
        let second = obs.rearm(&mut model, home);
        assert_eq!(first, second);
        assert_eq!(obs.watch_count(), 2);
    }

    #[test]
    fn rearm_drops_previous_section_watches() {
        let (mut model, home, about, a, _, c) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);
        obs.rearm(&mut model, home);
        obs.rearm(&mut model, about);
        assert!(!obs.is_watching(a));
        assert!(obs.is_watching(c));
        assert_eq!(obs.watch_count(), 1);
    }

    #[test]
    fn reveal_is_one_shot() {
        let (mut model, home, _, a, _, _) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);
        obs.rearm(&mut model, home);

        assert_eq!(obs.intersect(&mut model, a, true, 0.5), Intersection::Revealed);
        assert!(model.is_revealed(a));
        assert!(!obs.is_watching(a));
        assert_eq!(obs.intersect(&mut model, a, true, 0.5), Intersection::Stale);
    }

    #[test]
    fn below_threshold_is_ignored() {
        let (mut model, home, _, a, _, _) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);
        obs.rearm(&mut model, home);

        assert_eq!(obs.intersect(&mut model, a, true, 0.05), Intersection::Ignored);
        assert_eq!(obs.intersect(&mut model, a, false, 0.0), Intersection::Ignored);
        assert!(!model.is_revealed(a));
        assert!(obs.is_watching(a));
    }

    #[test]
    fn inactive_section_is_not_revealed() {
        let (mut model, home, about, a, _, _) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);
        obs.rearm(&mut model, home);

        // Section switched away after registration but before the report.
        model.deactivate_all();
        model.activate(about);
        assert_eq!(obs.intersect(&mut model, a, true, 1.0), Intersection::Ignored);
        assert!(!model.is_revealed(a));

        model.deactivate_all();
        model.activate(home);
        assert_eq!(obs.intersect(&mut model, a, true, 1.0), Intersection::Revealed);
        assert!(model.is_revealed(a));
    }

    #[test]
    fn rearm_resets_revealed_flags() {
        let (mut model, home, _, a, _, _) = site();
        let mut obs = RevealObserver::new(model.item_count(), 0.1);
        obs.rearm(&mut model, home);
        obs.intersect(&mut model, a, true, 1.0);
        assert!(model.is_revealed(a));

        obs.rearm(&mut model, home);
        assert!(!model.is_revealed(a));
        assert!(obs.is_watching(a));
    }
}
