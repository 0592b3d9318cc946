// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for model construction and section lookup.

use alloc::string::String;

/// Errors produced while building or navigating a [`SiteModel`].
///
/// Navigation never propagates these past [`Site`](crate::Site): an unknown
/// key is logged and leaves all state untouched.
///
/// [`SiteModel`]: crate::model::SiteModel
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// A trigger, fragment, or attribute named a key with no section.
    #[error("unknown section key: {0:?}")]
    UnknownSection(String),

    /// Two sections were declared with the same key.
    #[error("duplicate section key: {0:?}")]
    DuplicateSection(String),

    /// The model has no section matching the configured default key.
    #[error("no section matches the default key {0:?}")]
    MissingDefault(String),
}
