// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport observer behind reveal tracking.
//!
//! One `IntersectionObserver` serves the whole page. A re-arm disconnects it
//! and observes the new watch list; each revealed card is unobserved from
//! inside the callback.

use alloc::boxed::Box;

use folio_core::reveal::Rearm;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::presenter::DomPresenter;

type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` and the JS closure it calls.
pub(crate) struct ViewportObserver {
    observer: IntersectionObserver,
    /// Kept alive for as long as the observer may call it.
    _callback: EntriesClosure,
}

impl core::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportObserver").finish_non_exhaustive()
    }
}

impl ViewportObserver {
    /// Creates an observer that reports entries crossing `threshold`.
    ///
    /// `on_entry` is called once per reported entry with the entry and the
    /// observer, so it can unobserve the target.
    pub(crate) fn new(
        threshold: f64,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_entry(&entry, &observer);
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Replaces everything being observed with the cards in `rearm`.
    pub(crate) fn install(&self, presenter: &DomPresenter, rearm: &Rearm) {
        self.observer.disconnect();
        for &idx in &rearm.watch {
            if let Some(el) = presenter.item_element(idx) {
                self.observer.observe(el);
            }
        }
    }

    /// Stops observing everything.
    pub(crate) fn disconnect(&self) {
        self.observer.disconnect();
    }
}
