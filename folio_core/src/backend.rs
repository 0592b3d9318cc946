// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for document integrations.
//!
//! Folio splits document-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Discovery**: Scans the hosting document and declares sections,
//!   items, and FAQ entries on a [`SiteModel`], keeping a table from raw
//!   indices to native elements.
//!
//! - **Scheduling**: Runs [`Site::commit`](crate::Site::commit) at the next
//!   rendering opportunity (e.g. `requestAnimationFrame`). This is
//!   backend-specific and not abstracted by a trait.
//!
//! - **Effects**: Applies each [`Commit`](crate::switcher::Commit): history
//!   write, scroll to origin, and the reveal watch list.
//!
//! - **Presenter**: Implements the [`Presenter`] trait to project
//!   [`ViewChanges`] onto marker classes.
//!
//! # Crate boundaries
//!
//! `folio_core` owns the data model, the state machines, and this contract
//! module. Backend crates depend on `folio_core` and provide document glue.

use crate::model::{SiteModel, ViewChanges};

/// Applies evaluated model changes to a native presentation tree.
///
/// # Event handler pseudocode
///
/// ```rust,ignore
/// fn on_click(key: &str) {
///     if let Some(pending) = site.navigate(key) {
///         presenter.apply(site.model(), &site.evaluate());
///         request_animation_frame(move || {
///             if let Some(commit) = site.commit(pending) {
///                 apply_effects(&commit);
///                 presenter.apply(site.model(), &site.evaluate());
///             }
///         });
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`ViewChanges`] to the backing presentation tree,
    /// reading current flags from `model` as needed.
    fn apply(&mut self, model: &SiteModel, changes: &ViewChanges);
}
