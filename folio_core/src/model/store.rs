// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays site storage with declaration, lookup, and flag
//! management.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{FaqId, ItemId, SectionId};
use crate::dirty;
use crate::error::NavError;
use crate::header::HeaderState;

/// What a dirty-tracking node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Section(u32),
    Item(u32),
    Faq(u32),
}

/// Struct-of-arrays storage for sections, items, and FAQ entries.
///
/// Sections, items, and FAQ entries are addressed by their own index handles.
/// Each also occupies one *node* in a shared index space used for dirty
/// tracking, so an item can depend on its section.
#[derive(Debug)]
pub struct SiteModel {
    // -- Sections --
    pub(crate) section_key: Vec<String>,
    pub(crate) section_node: Vec<u32>,
    pub(crate) section_items: Vec<Vec<u32>>,
    pub(crate) key_index: BTreeMap<String, u32>,

    // -- Items --
    pub(crate) item_section: Vec<u32>,
    pub(crate) item_node: Vec<u32>,
    pub(crate) revealed: Vec<bool>,

    // -- FAQ entries --
    pub(crate) faq_node: Vec<u32>,
    pub(crate) faq_open: Vec<bool>,

    // -- Authoritative state --
    pub(crate) active: Option<u32>,
    pub(crate) header: HeaderState,

    // -- Presented state (last value reported through `ViewChanges`) --
    pub(crate) shown_active: Vec<Option<bool>>,
    pub(crate) shown_revealed: Vec<Option<bool>>,
    pub(crate) shown_faq: Vec<Option<bool>>,
    pub(crate) shown_header: Option<HeaderState>,

    // -- Dirty tracking --
    pub(crate) nodes: Vec<Node>,
    pub(crate) dirty: DirtyTracker<u32>,
    pub(crate) header_dirty: bool,
}

impl Default for SiteModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            section_key: Vec::new(),
            section_node: Vec::new(),
            section_items: Vec::new(),
            key_index: BTreeMap::new(),
            item_section: Vec::new(),
            item_node: Vec::new(),
            revealed: Vec::new(),
            faq_node: Vec::new(),
            faq_open: Vec::new(),
            active: None,
            header: HeaderState::VisibleUnshadowed,
            shown_active: Vec::new(),
            shown_revealed: Vec::new(),
            shown_faq: Vec::new(),
            shown_header: None,
            nodes: Vec::new(),
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            header_dirty: true,
        }
    }

    // -- Declaration API --

    /// Declares a section with the given key and returns its handle.
    ///
    /// The section starts inactive.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DuplicateSection`] if a section with the same key
    /// already exists.
    pub fn add_section(&mut self, key: impl Into<String>) -> Result<SectionId, NavError> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(NavError::DuplicateSection(key));
        }

        let idx = slot(self.section_key.len());
        let node = self.push_node(Node::Section(idx));
        self.key_index.insert(key.clone(), idx);
        self.section_key.push(key);
        self.section_node.push(node);
        self.section_items.push(Vec::new());
        self.shown_active.push(None);
        self.dirty.mark(node, dirty::ACTIVE);

        Ok(SectionId(idx))
    }

    /// Declares a revealable item belonging to `section`.
    ///
    /// The item starts unrevealed.
    ///
    /// # Panics
    ///
    /// Panics if `section` does not belong to this model.
    pub fn add_item(&mut self, section: SectionId) -> ItemId {
        self.validate_section(section);
        let idx = slot(self.item_section.len());
        let node = self.push_node(Node::Item(idx));
        let section_node = self.section_node[section.0 as usize];

        self.item_section.push(section.0);
        self.item_node.push(node);
        self.revealed.push(false);
        self.shown_revealed.push(None);
        self.section_items[section.0 as usize].push(idx);

        // Item depends on its section so a section-wide re-arm reaches it.
        let _ = self.dirty.add_dependency(node, section_node, dirty::REVEAL);
        self.dirty.mark(node, dirty::REVEAL);

        ItemId(idx)
    }

    /// Declares a collapsible FAQ entry. The entry starts closed.
    pub fn add_faq(&mut self) -> FaqId {
        let idx = slot(self.faq_open.len());
        let node = self.push_node(Node::Faq(idx));
        self.faq_node.push(node);
        self.faq_open.push(false);
        self.shown_faq.push(None);
        self.dirty.mark(node, dirty::FAQ);
        FaqId(idx)
    }

    // -- Lookup API --

    /// Resolves a section key to its handle.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownSection`] if no section has this key.
    pub fn resolve(&self, key: &str) -> Result<SectionId, NavError> {
        self.key_index
            .get(key)
            .map(|&idx| SectionId(idx))
            .ok_or_else(|| NavError::UnknownSection(key.to_string()))
    }

    /// Returns the number of declared sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.section_key.len()
    }

    /// Returns the number of declared items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_section.len()
    }

    /// Returns the number of declared FAQ entries.
    #[must_use]
    pub fn faq_count(&self) -> usize {
        self.faq_open.len()
    }

    /// Returns the handle for a raw section index, if it exists.
    #[must_use]
    pub fn section_at(&self, idx: u32) -> Option<SectionId> {
        ((idx as usize) < self.section_key.len()).then_some(SectionId(idx))
    }

    /// Returns the handle for a raw item index, if it exists.
    #[must_use]
    pub fn item_at(&self, idx: u32) -> Option<ItemId> {
        ((idx as usize) < self.item_section.len()).then_some(ItemId(idx))
    }

    /// Returns the handle for a raw FAQ index, if it exists.
    #[must_use]
    pub fn faq_at(&self, idx: u32) -> Option<FaqId> {
        ((idx as usize) < self.faq_open.len()).then_some(FaqId(idx))
    }

    /// Returns the key of a section.
    #[must_use]
    pub fn key(&self, section: SectionId) -> &str {
        self.validate_section(section);
        &self.section_key[section.0 as usize]
    }

    /// Returns the currently active section, if any has been activated yet.
    #[must_use]
    pub fn active(&self) -> Option<SectionId> {
        self.active.map(SectionId)
    }

    /// Returns whether `section` is the active section.
    #[must_use]
    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == Some(section.0)
    }

    /// Returns the items belonging to `section`, in declaration order.
    #[must_use]
    pub fn items(&self, section: SectionId) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        self.validate_section(section);
        self.section_items[section.0 as usize]
            .iter()
            .map(|&idx| ItemId(idx))
    }

    /// Returns the section that owns `item`.
    #[must_use]
    pub fn section_of(&self, item: ItemId) -> SectionId {
        self.validate_item(item);
        SectionId(self.item_section[item.0 as usize])
    }

    /// Returns whether `item` has been revealed during the current activation.
    #[must_use]
    pub fn is_revealed(&self, item: ItemId) -> bool {
        self.validate_item(item);
        self.revealed[item.0 as usize]
    }

    /// Returns whether the FAQ entry is open.
    #[must_use]
    pub fn is_faq_open(&self, faq: FaqId) -> bool {
        self.validate_faq(faq);
        self.faq_open[faq.0 as usize]
    }

    /// Returns the current header state.
    #[must_use]
    pub fn header(&self) -> HeaderState {
        self.header
    }

    // -- Raw index accessors (for backends applying `ViewChanges`) --

    /// Returns whether the section at raw index `idx` is active.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn is_active_at(&self, idx: u32) -> bool {
        assert!(
            (idx as usize) < self.section_key.len(),
            "section index out of bounds"
        );
        self.active == Some(idx)
    }

    /// Returns whether the item at raw index `idx` is revealed.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn is_revealed_at(&self, idx: u32) -> bool {
        self.revealed[idx as usize]
    }

    /// Returns whether the FAQ entry at raw index `idx` is open.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    #[must_use]
    pub fn is_faq_open_at(&self, idx: u32) -> bool {
        self.faq_open[idx as usize]
    }

    // -- Mutation (controllers only) --

    /// Clears the active flag on every section.
    ///
    /// Always followed by [`activate`](Self::activate) within the same
    /// operation; the inactive gap is never observable from outside.
    pub(crate) fn deactivate_all(&mut self) {
        self.active = None;
        for &node in &self.section_node {
            self.dirty.mark(node, dirty::ACTIVE);
        }
    }

    /// Makes `section` the single active section.
    pub(crate) fn activate(&mut self, section: SectionId) {
        self.validate_section(section);
        if let Some(prev) = self.active {
            self.dirty.mark(self.section_node[prev as usize], dirty::ACTIVE);
        }
        self.active = Some(section.0);
        self.dirty
            .mark(self.section_node[section.0 as usize], dirty::ACTIVE);
    }

    /// Clears the revealed flag on every item of `section`.
    pub(crate) fn conceal_section(&mut self, section: SectionId) {
        self.validate_section(section);
        for &item in &self.section_items[section.0 as usize] {
            self.revealed[item as usize] = false;
        }
        self.dirty.mark_with(
            self.section_node[section.0 as usize],
            dirty::REVEAL,
            &EagerPolicy,
        );
    }

    /// Sets an item's revealed flag. Returns `true` if the flag changed.
    pub(crate) fn set_revealed(&mut self, item: ItemId, revealed: bool) -> bool {
        self.validate_item(item);
        let flag = &mut self.revealed[item.0 as usize];
        if *flag == revealed {
            return false;
        }
        *flag = revealed;
        self.dirty
            .mark(self.item_node[item.0 as usize], dirty::REVEAL);
        true
    }

    /// Sets an FAQ entry's open flag.
    pub(crate) fn set_faq_open(&mut self, faq: FaqId, open: bool) {
        self.validate_faq(faq);
        if self.faq_open[faq.0 as usize] != open {
            self.faq_open[faq.0 as usize] = open;
            self.dirty.mark(self.faq_node[faq.0 as usize], dirty::FAQ);
        }
    }

    /// Sets the header state.
    pub(crate) fn set_header(&mut self, state: HeaderState) {
        if self.header != state {
            self.header = state;
            self.header_dirty = true;
        }
    }

    // -- Internal helpers --

    fn push_node(&mut self, node: Node) -> u32 {
        let idx = slot(self.nodes.len());
        self.nodes.push(node);
        idx
    }

    /// Panics if the handle does not belong to this model.
    fn validate_section(&self, id: SectionId) {
        assert!(
            (id.0 as usize) < self.section_key.len(),
            "unknown {id:?} (sections: {})",
            self.section_key.len()
        );
    }

    /// Panics if the handle does not belong to this model.
    fn validate_item(&self, id: ItemId) {
        assert!(
            (id.0 as usize) < self.item_section.len(),
            "unknown {id:?} (items: {})",
            self.item_section.len()
        );
    }

    /// Panics if the handle does not belong to this model.
    fn validate_faq(&self, id: FaqId) {
        assert!(
            (id.0 as usize) < self.faq_open.len(),
            "unknown {id:?} (faq entries: {})",
            self.faq_open.len()
        );
    }
}

/// Converts a vector length into the next slot index.
fn slot(len: usize) -> u32 {
    u32::try_from(len).expect("more than u32::MAX declarations")
}
