// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for folio.
//!
//! This crate connects a [`Site`](folio_core::Site) to a browser document:
//!
//! - [`DomPresenter`]: discovery of sections, cards, FAQ entries, and the
//!   header, and projection of model changes onto marker classes
//! - [`mount`]: startup sequence and event wiring (`click`, `popstate`,
//!   `scroll`, `IntersectionObserver`, `requestAnimationFrame`)
//! - [`init_logging`]: a [`log`] backend writing to the browser console
//!
//! ```rust,ignore
//! #[wasm_bindgen(start)]
//! pub fn main() -> Result<(), JsValue> {
//!     let _ = folio_web::init_logging(log::LevelFilter::Info);
//!     folio_web::mount(SiteConfig::standard())?.forget();
//!     Ok(())
//! }
//! ```

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "event wiring only runs in the browser")
)]

extern crate alloc;

mod app;
mod history;
mod logger;
mod observer;
mod presenter;
mod raf;

pub use app::{SiteHandle, mount};
pub use folio_core::backend::Presenter;
pub use folio_core::{Markers, SiteConfig};
pub use logger::{ConsoleLogger, init_logging};
pub use presenter::DomPresenter;
