// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! [`SiteModel`](crate::model::SiteModel) stores sections, items, and FAQ
//! entries as *nodes* in a single index space and tracks changes per channel
//! with [`understory_dirty`].
//!
//! # Propagation semantics
//!
//! - **Propagating**: [`REVEAL`] has dependency edges from each item to its
//!   section. Marking a section with
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) marks every item in it,
//!   which is how a re-arm invalidates a whole section at once.
//!
//! - **Local-only**: [`ACTIVE`] and [`FAQ`] are marked with the default
//!   policy. Only the explicitly marked node appears in the drain output.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`SiteModel::evaluate`](crate::model::SiteModel::evaluate) call drains
//! all channels and surfaces the results as
//! [`ViewChanges`](crate::model::ViewChanges), which backends
//! [consume](crate::backend::Presenter::apply).

use understory_dirty::Channel;

/// A section's active flag changed.
pub const ACTIVE: Channel = Channel::new(0);

/// An item's revealed flag changed (propagates from section to items).
pub const REVEAL: Channel = Channel::new(1);

/// An FAQ entry's open flag changed.
pub const FAQ: Channel = Channel::new(2);
