// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Site data model.
//!
//! A site is a fixed set of *sections* declared by the hosting document.
//! Each section has:
//!
//! - An identity ([`SectionId`]) and a unique string key (the element id and
//!   the URL fragment that selects it).
//! - Zero or more revealable *items* ([`ItemId`]), each with a `revealed`
//!   flag that is cleared whenever the section is re-armed.
//!
//! The model also carries the FAQ entries ([`FaqId`]) and the header's
//! [`HeaderState`](crate::header::HeaderState).
//!
//! The model is authoritative: marker classes in the document are a derived
//! view, updated from [`ViewChanges`] produced by
//! [`evaluate`](SiteModel::evaluate). Exactly one section is active at a time
//! because the active section is stored as a single index.
//!
//! Nothing is created or destroyed after the document has been scanned. Only
//! flags mutate.

mod evaluate;
mod id;
mod store;

pub use evaluate::ViewChanges;
pub use id::{FaqId, ItemId, SectionId};
pub use store::SiteModel;
