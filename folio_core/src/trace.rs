// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation event hooks.
//!
//! [`Site`](crate::Site) reports what it does to a [`NavSink`]. All methods
//! default to no-ops, so implementing only the events you care about is
//! fine.
//!
//! Two sinks ship with the crate:
//!
//! - [`NoopSink`] discards everything (the default).
//! - [`LogSink`] forwards every event to the [`log`] facade at `debug`
//!   level.

use crate::header::HeaderState;
use crate::model::{ItemId, SectionId};
use crate::switcher::HistoryOp;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// How an activation was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    /// Initial page load.
    Startup,
    /// Navigation trigger (two-phase).
    Navigate,
    /// Browser back/forward.
    Restore,
}

/// Emitted when a section becomes the active one.
#[derive(Clone, Copy, Debug)]
pub struct ActivateEvent<'a> {
    /// The activated section.
    pub section: SectionId,
    /// Its key.
    pub key: &'a str,
    /// What requested the activation.
    pub kind: ActivationKind,
}

/// Emitted when an activation's side effects have been committed.
#[derive(Clone, Copy, Debug)]
pub struct CommitEvent<'a> {
    /// The committed section.
    pub section: SectionId,
    /// History write, if any.
    pub history: Option<&'a HistoryOp>,
    /// Number of items watched after the re-arm.
    pub watched: usize,
}

/// Emitted when a card is revealed.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// The revealed item.
    pub item: ItemId,
    /// Its owning section.
    pub section: SectionId,
}

/// Emitted when the header changes state.
#[derive(Clone, Copy, Debug)]
pub struct HeaderEvent {
    /// State before the scroll event.
    pub from: HeaderState,
    /// State after the scroll event.
    pub to: HeaderState,
    /// Scroll offset that caused the change.
    pub offset: f64,
}

// ---------------------------------------------------------------------------
// NavSink trait
// ---------------------------------------------------------------------------

/// Receives navigation events from a [`Site`](crate::Site).
pub trait NavSink {
    /// Called when a section is activated.
    fn on_activate(&mut self, e: &ActivateEvent<'_>) {
        _ = e;
    }

    /// Called when a key names no section.
    fn on_unknown_section(&mut self, key: &str) {
        _ = key;
    }

    /// Called when an activation is committed.
    fn on_commit(&mut self, e: &CommitEvent<'_>) {
        _ = e;
    }

    /// Called when a pending switch was superseded before it could commit.
    fn on_superseded(&mut self, section: SectionId) {
        _ = section;
    }

    /// Called when a card is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the header changes state.
    fn on_header(&mut self, e: &HeaderEvent) {
        _ = e;
    }
}

/// A [`NavSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl NavSink for NoopSink {}

/// A [`NavSink`] that writes one `debug` log line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl NavSink for LogSink {
    fn on_activate(&mut self, e: &ActivateEvent<'_>) {
        log::debug!("activate {:?} {:?} ({:?})", e.section, e.key, e.kind);
    }

    fn on_commit(&mut self, e: &CommitEvent<'_>) {
        log::debug!(
            "commit {:?}: history {:?}, watching {}",
            e.section,
            e.history,
            e.watched
        );
    }

    fn on_superseded(&mut self, section: SectionId) {
        log::debug!("switch to {section:?} superseded");
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        log::debug!("reveal {:?} in {:?}", e.item, e.section);
    }

    fn on_header(&mut self, e: &HeaderEvent) {
        log::debug!("header {:?} -> {:?} at {}", e.from, e.to, e.offset);
    }
}
