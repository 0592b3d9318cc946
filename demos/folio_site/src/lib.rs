// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web example: a single-page portfolio driven by `folio_web`.
//!
//! The page in `index.html` carries three sections, a handful of cards per
//! section, an FAQ list, and a sticky header. Everything else (section
//! switching, card reveal, header state, FAQ toggles) comes from
//! [`mount`].
//!
//! Build with: `wasm-pack build --target web demos/folio_site`
//!
//! Then serve `demos/folio_site/` and open `index.html` in a browser.
//!
//! [`mount`]: folio_web::mount

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use folio_core::SiteConfig;
use log::LevelFilter;
use wasm_bindgen::prelude::*;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // A second initialisation (hot reload) keeps the first logger.
    let _ = folio_web::init_logging(LevelFilter::Debug);

    folio_web::mount(SiteConfig::standard())?.forget();
    log::info!("folio_site mounted");
    Ok(())
}
