// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section model, reveal tracking, and header state for single-page static
//! sites.
//!
//! `folio_core` owns the authoritative state of a page built from named
//! content sections: which section is active, which cards inside it have been
//! revealed, whether the header is hidden or shadowed, and which FAQ answers
//! are open. It is `no_std` compatible (with `alloc`) and never touches a
//! document directly. Every operation returns plain data that a backend
//! applies to its native tree.
//!
//! # Architecture
//!
//! ```text
//!   click / popstate / startup          scroll              intersection
//!             │                            │                      │
//!             ▼                            ▼                      ▼
//!   Site::navigate ─► PendingSwitch   Site::scroll          Site::intersect
//!             │        (next frame)        │                      │
//!             ▼             ▼              ▼                      ▼
//!        SiteModel ◄── Site::commit ── HeaderController     RevealObserver
//!             │             │
//!             ▼             ▼
//!   SiteModel::evaluate   Commit ──► history / scroll / observe
//!             │
//!             ▼
//!   ViewChanges ──► Presenter::apply()
//! ```
//!
//! **[`model`]**: Sections, items, and FAQ entries with index handles and
//! multi-channel dirty tracking. Flags are set by the controllers;
//! [`evaluate`](model::SiteModel::evaluate) turns them into
//! [`ViewChanges`](model::ViewChanges).
//!
//! **[`dirty`]**: Dirty channel constants (via `understory_dirty`).
//!
//! **[`switcher`]**: Two-phase section switching and the history
//! operations it produces.
//!
//! **[`reveal`]**: One-shot reveal tracking per section activation.
//!
//! **[`header`]**: Scroll-direction state machine for the page header.
//!
//! **[`fragment`]**: Parsing of URL fragments and navigation trigger
//! targets.
//!
//! **[`site`]**: [`Site`](site::Site), the orchestrator backends drive.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait.
//!
//! **[`trace`]**: [`NavSink`](trace::NavSink) event hooks.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod dirty;
pub mod error;
pub mod fragment;
pub mod header;
pub mod model;
pub mod reveal;
pub mod site;
pub mod switcher;
pub mod trace;

pub use config::{Markers, SiteConfig};
pub use error::NavError;
pub use site::Site;
