// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session history, fragment, and scroll position access.

use alloc::string::String;

use folio_core::switcher::HistoryOp;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Returns `location.hash`, or an empty string if it cannot be read.
pub(crate) fn current_hash(window: &Window) -> String {
    window.location().hash().unwrap_or_default()
}

/// Writes `op` to the session history without reloading.
pub(crate) fn write(window: &Window, op: &HistoryOp) -> Result<(), JsValue> {
    let history = window.history()?;
    let url = op.hash();
    match op {
        HistoryOp::Push(_) => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryOp::Replace(_) => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
    }
}

/// Returns the current vertical scroll offset, or zero if unavailable.
pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Scrolls the viewport back to the top-left corner.
pub(crate) fn scroll_to_origin(window: &Window) {
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
