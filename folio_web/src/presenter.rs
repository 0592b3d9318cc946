// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document discovery and class projection.
//!
//! [`DomPresenter::discover`] scans the hosting document once and declares
//! every section, card, and FAQ entry on a fresh [`SiteModel`], remembering
//! the element behind each raw index. [`Presenter::apply`] then toggles
//! marker classes from [`ViewChanges`].
//!
//! Cards and FAQ entries are tagged with their raw index in a `data-`
//! attribute so event callbacks can map an element back to the model.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use folio_core::backend::Presenter;
use folio_core::config::Markers;
use folio_core::header::HeaderState;
use folio_core::model::{SiteModel, ViewChanges};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, NodeList};

/// Attribute holding a card's raw item index.
pub(crate) const ITEM_ATTR: &str = "data-folio-item";

/// Attribute holding an FAQ entry's raw index.
pub(crate) const FAQ_ATTR: &str = "data-folio-faq";

/// Maps a [`SiteModel`] to live DOM elements, applying class changes from
/// [`ViewChanges`].
pub struct DomPresenter {
    markers: Markers,
    sections: Vec<Element>,
    items: Vec<Element>,
    faq_answers: Vec<Element>,
    header: Option<Element>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("markers", &self.markers)
            .field("sections_len", &self.sections.len())
            .field("items_len", &self.items.len())
            .field("faq_len", &self.faq_answers.len())
            .field("header", &self.header.is_some())
            .finish()
    }
}

impl DomPresenter {
    /// Scans `document` for sections, cards, FAQ entries, and the header.
    ///
    /// Sections without an `id` and sections whose `id` repeats an earlier
    /// one are skipped with a warning. FAQ entries without an answer
    /// sub-unit are skipped silently.
    ///
    /// # Errors
    ///
    /// Propagates selector errors from the DOM (only possible with malformed
    /// marker names).
    pub fn discover(document: &Document, markers: Markers) -> Result<(SiteModel, Self), JsValue> {
        let mut model = SiteModel::new();
        let mut presenter = Self {
            markers,
            sections: Vec::new(),
            items: Vec::new(),
            faq_answers: Vec::new(),
            header: document.query_selector(markers.header)?,
        };
        if presenter.header.is_none() {
            log::warn!(
                "no element matches header selector {:?}; header state is not shown",
                markers.header
            );
        }

        let card_selector = class_selector(markers.card);
        for section_el in elements(&document.query_selector_all(&class_selector(markers.section))?)
        {
            let key = section_el.id();
            if key.is_empty() {
                log::warn!("section element without an id skipped");
                continue;
            }
            let section = match model.add_section(key) {
                Ok(section) => section,
                Err(err) => {
                    log::warn!("{err}; section skipped");
                    continue;
                }
            };
            presenter.sections.push(section_el.clone());

            for card in elements(&section_el.query_selector_all(&card_selector)?) {
                let item = model.add_item(section);
                card.set_attribute(ITEM_ATTR, &format!("{}", item.index()))?;
                presenter.items.push(card);
            }
        }

        let answer_selector = class_selector(markers.faq_answer);
        for entry in elements(&document.query_selector_all(&class_selector(markers.faq_item))?) {
            let Some(answer) = entry.query_selector(&answer_selector)? else {
                continue;
            };
            let faq = model.add_faq();
            entry.set_attribute(FAQ_ATTR, &format!("{}", faq.index()))?;
            presenter.faq_answers.push(answer);
        }

        log::debug!(
            "discovered {} section(s), {} card(s), {} faq entr(ies)",
            model.section_count(),
            model.item_count(),
            model.faq_count()
        );
        Ok((model, presenter))
    }

    /// Returns the element of the section at raw index `idx`.
    #[must_use]
    pub fn section_element(&self, idx: u32) -> Option<&Element> {
        self.sections.get(idx as usize)
    }

    /// Returns the card element of the item at raw index `idx`.
    #[must_use]
    pub fn item_element(&self, idx: u32) -> Option<&Element> {
        self.items.get(idx as usize)
    }

    /// Returns the answer element of the FAQ entry at raw index `idx`.
    #[must_use]
    pub fn faq_answer(&self, idx: u32) -> Option<&Element> {
        self.faq_answers.get(idx as usize)
    }

    /// Returns the header element, if the document has one.
    #[must_use]
    pub fn header(&self) -> Option<&Element> {
        self.header.as_ref()
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Section(idx) => self.section_element(idx),
            Target::Item(idx) => self.item_element(idx),
            Target::FaqAnswer(idx) => self.faq_answer(idx),
            Target::Header => self.header(),
        }
    }
}

impl Presenter for DomPresenter {
    /// Applies class changes from a [`ViewChanges`] to the DOM.
    fn apply(&mut self, model: &SiteModel, changes: &ViewChanges) {
        for op in class_ops(&self.markers, model, changes) {
            if let Some(el) = self.element(op.target) {
                set_class(el, op.class, op.on);
            }
        }
    }
}

/// The element a [`ClassOp`] applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    Section(u32),
    Item(u32),
    FaqAnswer(u32),
    Header,
}

/// One class toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClassOp {
    pub(crate) target: Target,
    pub(crate) class: &'static str,
    pub(crate) on: bool,
}

/// Lists the class toggles for `changes`, reading each flag from `model`.
///
/// Deactivations come before activations so at most one section carries the
/// active class at any time. The same holds for conceal/reveal and
/// close/open.
pub(crate) fn class_ops(
    markers: &Markers,
    model: &SiteModel,
    changes: &ViewChanges,
) -> Vec<ClassOp> {
    let mut ops = Vec::new();

    for &idx in changes.deactivated.iter().chain(&changes.activated) {
        ops.push(ClassOp {
            target: Target::Section(idx),
            class: markers.active,
            on: model.is_active_at(idx),
        });
    }
    for &idx in changes.concealed.iter().chain(&changes.revealed) {
        ops.push(ClassOp {
            target: Target::Item(idx),
            class: markers.revealed,
            on: model.is_revealed_at(idx),
        });
    }
    for &idx in changes.faq_closed.iter().chain(&changes.faq_opened) {
        ops.push(ClassOp {
            target: Target::FaqAnswer(idx),
            class: markers.faq_shown,
            on: model.is_faq_open_at(idx),
        });
    }

    if let Some(state) = changes.header {
        let (hidden, shadowed) = header_classes(state);
        ops.push(ClassOp {
            target: Target::Header,
            class: markers.header_hidden,
            on: hidden,
        });
        ops.push(ClassOp {
            target: Target::Header,
            class: markers.header_shadow,
            on: shadowed,
        });
    }

    ops
}

/// Reads a raw index stored in `attr` on `el`.
pub(crate) fn index_attr(el: &Element, attr: &str) -> Option<u32> {
    el.get_attribute(attr)?.parse().ok()
}

/// Returns `(hidden, shadowed)` class flags for a header state.
///
/// A hidden header keeps its shadow: it is only ever hidden above the
/// threshold, and dropping the shadow would show mid-slide.
fn header_classes(state: HeaderState) -> (bool, bool) {
    match state {
        HeaderState::Hidden => (true, true),
        HeaderState::VisibleShadowed => (false, true),
        HeaderState::VisibleUnshadowed => (false, false),
    }
}

/// Builds a `.class` selector.
pub(crate) fn class_selector(class: &str) -> String {
    format!(".{class}")
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Iterates the elements of a `NodeList`, skipping non-element nodes.
fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

#[cfg(test)]
mod tests {
    use folio_core::reveal::Intersection;
    use folio_core::{Site, SiteConfig};

    use super::*;

    const M: Markers = Markers::standard();

    /// `home` with one card, `about` with one card, and one FAQ entry.
    fn site() -> Site {
        let mut model = SiteModel::new();
        let home = model.add_section("home").unwrap();
        let about = model.add_section("about").unwrap();
        model.add_item(home);
        model.add_item(about);
        model.add_faq();
        Site::new(model, SiteConfig::standard()).unwrap()
    }

    fn op(target: Target, class: &'static str, on: bool) -> ClassOp {
        ClassOp { target, class, on }
    }

    #[test]
    fn first_pass_normalises_every_element() {
        let mut site = site();
        site.start("");
        let changes = site.evaluate();
        let ops = class_ops(&M, site.model(), &changes);

        let off = ops
            .iter()
            .position(|o| *o == op(Target::Section(1), M.active, false))
            .expect("about is deactivated");
        let on = ops
            .iter()
            .position(|o| *o == op(Target::Section(0), M.active, true))
            .expect("home is activated");
        assert!(off < on, "deactivation must precede activation");

        assert!(ops.contains(&op(Target::Item(0), M.revealed, false)));
        assert!(ops.contains(&op(Target::Item(1), M.revealed, false)));
        assert!(ops.contains(&op(Target::FaqAnswer(0), M.faq_shown, false)));
        assert!(ops.contains(&op(Target::Header, M.header_hidden, false)));
        assert!(ops.contains(&op(Target::Header, M.header_shadow, false)));
    }

    #[test]
    fn flags_are_read_from_the_model() {
        let mut site = site();
        site.start("");
        let _ = site.evaluate();

        assert_eq!(site.intersect(0, true, 0.5), Intersection::Revealed);
        site.toggle_faq(0);
        let changes = site.evaluate();
        assert_eq!(
            class_ops(&M, site.model(), &changes),
            [
                op(Target::Item(0), M.revealed, true),
                op(Target::FaqAnswer(0), M.faq_shown, true),
            ]
        );

        site.toggle_faq(0);
        let changes = site.evaluate();
        assert_eq!(
            class_ops(&M, site.model(), &changes),
            [op(Target::FaqAnswer(0), M.faq_shown, false)]
        );
    }

    #[test]
    fn hidden_header_keeps_its_shadow() {
        let mut site = site();
        site.start("");
        let _ = site.evaluate();

        site.scroll(500.0);
        let changes = site.evaluate();
        assert_eq!(
            class_ops(&M, site.model(), &changes),
            [
                op(Target::Header, M.header_hidden, true),
                op(Target::Header, M.header_shadow, true),
            ]
        );
    }

    #[test]
    fn class_selector_prefixes_dot() {
        assert_eq!(class_selector("content-card"), ".content-card");
    }

    #[test]
    fn header_class_flags() {
        assert_eq!(header_classes(HeaderState::Hidden), (true, true));
        assert_eq!(header_classes(HeaderState::VisibleShadowed), (false, true));
        assert_eq!(header_classes(HeaderState::VisibleUnshadowed), (false, false));
    }
}
