// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrator backends drive.
//!
//! [`Site`] owns the [`SiteModel`] and the three controllers that mutate it:
//! the [`PageSwitcher`], the [`RevealObserver`], and the
//! [`HeaderController`]. Each entry point corresponds to one kind of event a
//! backend receives:
//!
//! | event | entry point |
//! |---|---|
//! | initial load | [`Site::start`] |
//! | navigation trigger click | [`Site::navigate`], then [`Site::commit`] next frame |
//! | back/forward (`popstate`) | [`Site::restore`] |
//! | viewport intersection | [`Site::intersect`] |
//! | scroll | [`Site::scroll`] |
//! | FAQ question click | [`Site::toggle_faq`] |
//!
//! After any entry point, [`Site::evaluate`] yields the
//! [`ViewChanges`] to present.
//!
//! An unknown section key is never an error for the caller: it is logged at
//! `warn` level, reported to the [`NavSink`], and leaves the model untouched.

use alloc::boxed::Box;
use alloc::string::ToString;

use crate::config::SiteConfig;
use crate::error::NavError;
use crate::fragment;
use crate::header::{HeaderController, HeaderState};
use crate::model::{SectionId, SiteModel, ViewChanges};
use crate::reveal::{Intersection, RevealObserver};
use crate::switcher::{Commit, HistoryOp, PageSwitcher, PendingSwitch};
use crate::trace::{
    ActivateEvent, ActivationKind, CommitEvent, HeaderEvent, NavSink, NoopSink, RevealEvent,
};

/// Section switching, reveal tracking, and header state for one page.
pub struct Site {
    config: SiteConfig,
    model: SiteModel,
    default_section: SectionId,
    switcher: PageSwitcher,
    reveal: RevealObserver,
    header: HeaderController,
    sink: Box<dyn NavSink>,
}

impl core::fmt::Debug for Site {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Site")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("default_section", &self.default_section)
            .field("switcher", &self.switcher)
            .field("reveal", &self.reveal)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

impl Site {
    /// Creates a site over a fully declared `model`.
    ///
    /// No section is active until [`start`](Self::start) is called.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::MissingDefault`] if no section matches
    /// [`SiteConfig::default_section`].
    pub fn new(model: SiteModel, config: SiteConfig) -> Result<Self, NavError> {
        let default_section = model
            .resolve(config.default_section)
            .map_err(|_| NavError::MissingDefault(config.default_section.to_string()))?;
        let reveal = RevealObserver::new(model.item_count(), config.reveal_threshold);
        Ok(Self {
            config,
            model,
            default_section,
            switcher: PageSwitcher::new(),
            reveal,
            header: HeaderController::new(config.header_threshold),
            sink: Box::new(NoopSink),
        })
    }

    /// Attaches a [`NavSink`] that receives every navigation event.
    #[must_use]
    pub fn with_sink(mut self, sink: impl NavSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &SiteModel {
        &self.model
    }

    /// Returns the reveal observer state.
    #[must_use]
    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    /// Drains pending model changes. See [`SiteModel::evaluate`].
    pub fn evaluate(&mut self) -> ViewChanges {
        self.model.evaluate()
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided buffer.
    pub fn evaluate_into(&mut self, changes: &mut ViewChanges) {
        self.model.evaluate_into(changes);
    }

    /// Resolves the section named by a `location.hash` value.
    ///
    /// Absent and empty fragments select the default section silently;
    /// unknown keys select it after a diagnostic.
    pub fn resolve_hash(&mut self, hash: &str) -> SectionId {
        match fragment::key_from_hash(hash) {
            None => self.default_section,
            Some(key) => match self.model.resolve(key) {
                Ok(section) => section,
                Err(err) => {
                    self.diagnose(key, &err);
                    self.default_section
                }
            },
        }
    }

    /// Activates the section named by the initial fragment.
    ///
    /// Falls back to the default section, activates directly without a
    /// deferred phase, re-arms reveal tracking, and replaces the current
    /// history entry so the resolved key is reflected in the URL.
    pub fn start(&mut self, hash: &str) -> Commit {
        let section = self.resolve_hash(hash);
        let history = HistoryOp::Replace(self.model.key(section).to_string());
        self.activate_now(section, Some(history), ActivationKind::Startup)
    }

    /// Applies the first phase of a user-triggered switch to `key`.
    ///
    /// Returns `None` after a diagnostic if `key` names no section; nothing
    /// is mutated in that case.
    pub fn navigate(&mut self, key: &str) -> Option<PendingSwitch> {
        match self.switcher.begin(&mut self.model, key) {
            Ok(pending) => {
                self.sink.on_activate(&ActivateEvent {
                    section: pending.section(),
                    key,
                    kind: ActivationKind::Navigate,
                });
                Some(pending)
            }
            Err(err) => {
                self.diagnose(key, &err);
                None
            }
        }
    }

    /// Applies the second phase of a switch started by
    /// [`navigate`](Self::navigate).
    ///
    /// Returns `None` if a later activation superseded it.
    pub fn commit(&mut self, pending: PendingSwitch) -> Option<Commit> {
        let Some(commit) = self
            .switcher
            .finish(&mut self.model, &mut self.reveal, pending)
        else {
            self.sink.on_superseded(pending.section());
            return None;
        };
        self.report_commit(&commit);
        Some(commit)
    }

    /// Re-applies the section named by the fragment after back/forward
    /// navigation.
    ///
    /// Activates directly and re-arms, but writes no history (the browser
    /// already moved to the entry) and does not scroll.
    pub fn restore(&mut self, hash: &str) -> Commit {
        let section = self.resolve_hash(hash);
        self.activate_now(section, None, ActivationKind::Restore)
    }

    /// Handles an intersection report for the item at raw index `item`.
    pub fn intersect(&mut self, item: u32, is_intersecting: bool, ratio: f64) -> Intersection {
        let Some(id) = self.model.item_at(item) else {
            return Intersection::Stale;
        };
        let outcome = self
            .reveal
            .intersect(&mut self.model, id, is_intersecting, ratio);
        if outcome == Intersection::Revealed {
            self.sink.on_reveal(&RevealEvent {
                item: id,
                section: self.model.section_of(id),
            });
        }
        outcome
    }

    /// Evaluates one scroll event at vertical `offset`.
    ///
    /// Backends also call this once at startup with the current offset.
    pub fn scroll(&mut self, offset: f64) -> HeaderState {
        let from = self.model.header();
        let to = self.header.update(&mut self.model, offset);
        if from != to {
            self.sink.on_header(&HeaderEvent { from, to, offset });
        }
        to
    }

    /// Toggles the FAQ entry at raw index `faq`.
    ///
    /// Returns the new open flag, or `None` if there is no such entry.
    pub fn toggle_faq(&mut self, faq: u32) -> Option<bool> {
        let id = self.model.faq_at(faq)?;
        let open = !self.model.is_faq_open(id);
        self.model.set_faq_open(id, open);
        Some(open)
    }

    fn activate_now(
        &mut self,
        section: SectionId,
        history: Option<HistoryOp>,
        kind: ActivationKind,
    ) -> Commit {
        let commit = self
            .switcher
            .activate_now(&mut self.model, &mut self.reveal, section, history);
        self.sink.on_activate(&ActivateEvent {
            section,
            key: self.model.key(section),
            kind,
        });
        self.report_commit(&commit);
        commit
    }

    fn report_commit(&mut self, commit: &Commit) {
        self.sink.on_commit(&CommitEvent {
            section: commit.section,
            history: commit.history.as_ref(),
            watched: commit.rearm.watch.len(),
        });
    }

    fn diagnose(&mut self, key: &str, err: &NavError) {
        log::warn!("{err}; navigation ignored");
        self.sink.on_unknown_section(key);
    }
}
