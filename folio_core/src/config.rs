// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site configuration and document marker names.

/// Names of the classes, attributes, and selectors a backend uses to find
/// and project state onto the hosting document.
///
/// Core code never interprets these; they travel with [`SiteConfig`] so that
/// a backend and the page markup agree on one set of names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Markers {
    /// Class shared by every navigable section. The section key is the
    /// element's `id`.
    pub section: &'static str,
    /// Class present on the active section only.
    pub active: &'static str,
    /// Attribute carrying an explicit target section key on a trigger.
    pub nav_attr: &'static str,
    /// Selector matching navigation triggers.
    pub nav_selector: &'static str,
    /// Class marking a revealable card.
    pub card: &'static str,
    /// Class added to a card once it has been revealed.
    pub revealed: &'static str,
    /// Selector matching the page header.
    pub header: &'static str,
    /// Class added to the header while it is hidden.
    pub header_hidden: &'static str,
    /// Class added to the header while it carries a shadow.
    pub header_shadow: &'static str,
    /// Class marking a collapsible FAQ entry.
    pub faq_item: &'static str,
    /// Class of the clickable question inside an FAQ entry.
    pub faq_question: &'static str,
    /// Class of the answer sub-unit inside an FAQ entry.
    pub faq_answer: &'static str,
    /// Class added to an answer while it is shown.
    pub faq_shown: &'static str,
}

impl Markers {
    /// The marker names used by the stock site markup.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            section: "page-content",
            active: "active",
            nav_attr: "data-page",
            nav_selector: "[data-page], a[href*='#']",
            card: "content-card",
            revealed: "visible",
            header: "header",
            header_hidden: "header-hidden",
            header_shadow: "scrolled",
            faq_item: "faq-item",
            faq_question: "faq-question",
            faq_answer: "faq-answer",
            faq_shown: "show",
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration for a [`Site`](crate::Site).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    /// Section activated when the fragment is absent or names no section.
    pub default_section: &'static str,
    /// Minimum intersection ratio (0.0–1.0) at which a card is revealed.
    pub reveal_threshold: f64,
    /// Scroll offset (CSS pixels) below which the header is always shown
    /// without a shadow.
    pub header_threshold: f64,
    /// Document marker names.
    pub markers: Markers,
}

impl SiteConfig {
    /// Default configuration: `home` fallback, 10% reveal ratio, 70px header
    /// threshold, stock markers.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            default_section: "home",
            reveal_threshold: 0.1,
            header_threshold: 70.0,
            markers: Markers::standard(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::standard()
    }
}
