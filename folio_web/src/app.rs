// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event wiring.
//!
//! [`mount`] discovers the document, runs the startup sequence, and
//! registers the listeners that drive a [`Site`]:
//!
//! - `click` on the document (delegated): navigation triggers and FAQ
//!   questions.
//! - `popstate` on the window: back/forward restoration.
//! - `scroll` on the window (passive): header state.
//!
//! All handlers share one [`Runtime`] behind `Rc<RefCell<…>>`. Each handler
//! borrows it, runs to completion, and releases it before returning; the
//! deferred half of a switch runs in its own animation frame.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_core::backend::Presenter as _;
use folio_core::fragment;
use folio_core::model::ViewChanges;
use folio_core::reveal::Intersection;
use folio_core::switcher::{Commit, PendingSwitch};
use folio_core::trace::LogSink;
use folio_core::{Site, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, Window,
};

use crate::history;
use crate::observer::ViewportObserver;
use crate::presenter::{self, DomPresenter, FAQ_ATTR, ITEM_ATTR};
use crate::raf;

/// State shared by every handler.
struct Runtime {
    site: Site,
    presenter: DomPresenter,
    window: Window,
    observer: Option<ViewportObserver>,
    changes: ViewChanges,
}

impl Runtime {
    /// Projects pending model changes onto the document.
    fn present(&mut self) {
        self.site.evaluate_into(&mut self.changes);
        if !self.changes.is_empty() {
            self.presenter.apply(self.site.model(), &self.changes);
        }
    }

    /// Applies a commit's history write, scroll, and watch list.
    fn apply_commit(&mut self, commit: &Commit) {
        if let Some(op) = &commit.history
            && let Err(err) = history::write(&self.window, op)
        {
            log::error!("history write for {:?} failed: {err:?}", op.key());
        }
        if commit.scroll_to_origin {
            history::scroll_to_origin(&self.window);
        }
        if let Some(observer) = &self.observer {
            observer.install(&self.presenter, &commit.rearm);
        }
    }

    /// Runs the deferred half of a switch.
    fn finish(&mut self, pending: PendingSwitch) {
        if let Some(commit) = self.site.commit(pending) {
            self.apply_commit(&commit);
        }
        self.present();
    }

    fn on_entry(&mut self, entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        let target = entry.target();
        let Some(idx) = presenter::index_attr(&target, ITEM_ATTR) else {
            observer.unobserve(&target);
            return;
        };
        match self
            .site
            .intersect(idx, entry.is_intersecting(), entry.intersection_ratio())
        {
            Intersection::Revealed | Intersection::Stale => observer.unobserve(&target),
            Intersection::Ignored => {}
        }
    }
}

type Shared = Rc<RefCell<Runtime>>;

/// A registered event listener, removed again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// A mounted site.
///
/// Dropping the handle removes every listener and disconnects the viewport
/// observer. Call [`forget`](Self::forget) to keep the site running for the
/// lifetime of the page.
pub struct SiteHandle {
    runtime: Shared,
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for SiteHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SiteHandle")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SiteHandle {
    /// Returns the key of the active section.
    #[must_use]
    pub fn active_key(&self) -> Option<String> {
        let runtime = self.runtime.borrow();
        let model = runtime.site.model();
        model.active().map(|section| model.key(section).to_string())
    }

    /// Switches to `key` as if a navigation trigger for it was clicked.
    ///
    /// Returns `false` (after a diagnostic) if `key` names no section.
    pub fn navigate(&self, key: &str) -> bool {
        navigate(&self.runtime, key)
    }

    /// Leaks the handle so listeners stay registered for the page lifetime.
    pub fn forget(self) {
        core::mem::forget(self);
    }
}

impl Drop for SiteHandle {
    fn drop(&mut self) {
        self.listeners.clear();
        if let Ok(mut runtime) = self.runtime.try_borrow_mut()
            && let Some(observer) = runtime.observer.take()
        {
            observer.disconnect();
        }
    }
}

/// Mounts folio on the current document.
///
/// Discovers sections, cards, FAQ entries, and the header; activates the
/// section named by the URL fragment (or the default); evaluates the header
/// against the current scroll offset; and registers all listeners.
///
/// # Errors
///
/// Fails if there is no window or document, if a DOM call fails during
/// setup, or if no section matches [`SiteConfig::default_section`].
pub fn mount(config: SiteConfig) -> Result<SiteHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let (model, presenter) = DomPresenter::discover(&document, config.markers)?;
    let site = Site::new(model, config)
        .map_err(|err| JsValue::from_str(&err.to_string()))?
        .with_sink(LogSink);

    let runtime: Shared = Rc::new(RefCell::new(Runtime {
        site,
        presenter,
        window: window.clone(),
        observer: None,
        changes: ViewChanges::default(),
    }));

    // The observer lives inside the runtime, so its callback holds a weak
    // reference.
    let weak: Weak<RefCell<Runtime>> = Rc::downgrade(&runtime);
    let observer = ViewportObserver::new(config.reveal_threshold, move |entry, observer| {
        if let Some(runtime) = weak.upgrade() {
            let mut runtime = runtime.borrow_mut();
            runtime.on_entry(entry, observer);
            runtime.present();
        }
    })?;

    {
        let mut rt = runtime.borrow_mut();
        rt.observer = Some(observer);
        let hash = history::current_hash(&rt.window);
        let commit = rt.site.start(&hash);
        rt.apply_commit(&commit);
        let offset = history::scroll_offset(&rt.window);
        rt.site.scroll(offset);
        rt.present();
    }

    let mut listeners = Vec::with_capacity(3);

    let click_rt = Rc::clone(&runtime);
    listeners.push(Listener::add(&document, "click", false, move |event| {
        on_click(&click_rt, &config, &event);
    })?);

    let pop_rt = Rc::clone(&runtime);
    listeners.push(Listener::add(&window, "popstate", false, move |_event| {
        let mut rt = pop_rt.borrow_mut();
        let hash = history::current_hash(&rt.window);
        let commit = rt.site.restore(&hash);
        rt.apply_commit(&commit);
        rt.present();
    })?);

    let scroll_rt = Rc::clone(&runtime);
    listeners.push(Listener::add(&window, "scroll", true, move |_event| {
        let mut rt = scroll_rt.borrow_mut();
        let offset = history::scroll_offset(&rt.window);
        rt.site.scroll(offset);
        rt.present();
    })?);

    Ok(SiteHandle { runtime, listeners })
}

fn on_click(runtime: &Shared, config: &SiteConfig, event: &Event) {
    let Some(target) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
    else {
        return;
    };
    let m = &config.markers;

    if let Ok(Some(trigger)) = target.closest(m.nav_selector) {
        let attr = trigger.get_attribute(m.nav_attr);
        let href = trigger.get_attribute("href");
        if follow_trigger(attr.as_deref(), href.as_deref(), |key| navigate(runtime, key)) {
            event.prevent_default();
        }
        return;
    }

    let question = presenter::class_selector(m.faq_question);
    if let Ok(Some(_)) = target.closest(&question) {
        let item = presenter::class_selector(m.faq_item);
        if let Some(idx) = target
            .closest(&item)
            .ok()
            .flatten()
            .and_then(|entry| presenter::index_attr(&entry, FAQ_ATTR))
        {
            let mut rt = runtime.borrow_mut();
            rt.site.toggle_faq(idx);
            rt.present();
        }
    }
}

/// Runs the first phase of a switch now and schedules the second.
fn navigate(runtime: &Shared, key: &str) -> bool {
    let pending = {
        let mut rt = runtime.borrow_mut();
        let pending = rt.site.navigate(key);
        rt.present();
        pending
    };
    let Some(pending) = pending else {
        return false;
    };
    let runtime = Rc::clone(runtime);
    raf::next_frame(move || runtime.borrow_mut().finish(pending));
    true
}

/// Navigates to the key a trigger names, if any, and returns whether the
/// browser default must be cancelled.
///
/// A bare `#` link names no key but still stays in-page, so its default is
/// cancelled too; otherwise the address bar would show an empty fragment.
fn follow_trigger(
    attr: Option<&str>,
    href: Option<&str>,
    navigate: impl FnOnce(&str) -> bool,
) -> bool {
    let navigated = fragment::trigger_key(attr, href).is_some_and(navigate);
    navigated || is_in_page(attr, href)
}

/// Whether a trigger targets this document rather than another page.
///
/// Explicit attributes and bare fragments always stay in-page, so their
/// default action is cancelled even when the key is unknown.
fn is_in_page(attr: Option<&str>, href: Option<&str>) -> bool {
    attr.is_some_and(|key| !key.is_empty()) || href.is_some_and(|href| href.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_page_triggers() {
        assert!(is_in_page(Some("home"), None));
        assert!(is_in_page(None, Some("#bogus")));
        assert!(!is_in_page(None, Some("other.html#faq")));
        assert!(!is_in_page(Some(""), Some("https://example.org/#x")));
        assert!(!is_in_page(None, None));
    }

    #[test]
    fn bare_fragment_link_is_cancelled_without_navigating() {
        let cancel = follow_trigger(None, Some("#"), |key| panic!("navigated to {key:?}"));
        assert!(cancel, "a bare `#` link must not reach the address bar");
    }

    #[test]
    fn trigger_outcomes() {
        let mut seen = Vec::new();
        assert!(follow_trigger(Some("about"), Some("#home"), |key| {
            seen.push(key.to_string());
            true
        }));
        assert_eq!(seen, ["about"]);

        // Unknown in-page key: nothing happens, but the default is cancelled.
        assert!(follow_trigger(None, Some("#bogus"), |_| false));

        // Unknown key on another page: the browser follows the link.
        assert!(!follow_trigger(None, Some("other.html#bogus"), |_| false));

        // Known key on another page resolved here: handled in place.
        assert!(follow_trigger(None, Some("index.html#about"), |_| true));
    }
}
