// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `requestAnimationFrame` scheduling.
//!
//! The second phase of a section switch runs in the frame after the
//! activation classes were applied, so CSS transitions keyed on the active
//! class start from a rendered inactive state.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global binding instead of `web_sys::Window::request_animation_frame`
// avoids fetching (and unwrapping) the Window object per request.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;
}

/// Runs `f` once at the next rendering opportunity.
///
/// The closure is handed to JS and freed after it runs. There is no
/// cancellation; callers that may be superseded check for that themselves.
pub(crate) fn next_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(move |_timestamp_ms: f64| f());
    let _ = request_animation_frame(&callback);
}
