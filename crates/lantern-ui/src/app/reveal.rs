//! One-shot scroll reveal and navigation stagger.

use super::UiController;
use crate::app::dom;
use crate::core::error::UiError;
use gloo::console;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observer plus the closure it calls; both must outlive the page's scroll events.
pub(crate) struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl UiController {
    pub(super) fn arm_reveal(&self) {
        if self.reveal.borrow().is_some() {
            return;
        }
        let targets = dom::query_all(&self.document, &self.config.reveal.selector());
        if targets.is_empty() {
            return;
        }
        let class = self.config.reveal.class.clone();
        match self.build_reveal_observer(class.clone()) {
            Ok(reveal) => {
                for target in &targets {
                    reveal.observer.observe(target);
                }
                *self.reveal.borrow_mut() = Some(reveal);
            }
            Err(err) => {
                console::debug!("lantern: intersection observer unavailable", err.to_string());
                for target in &targets {
                    dom::log_result(dom::add_class(target, &class));
                }
            }
        }
    }

    fn build_reveal_observer(&self, class: String) -> Result<RevealObserver, UiError> {
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    dom::log_result(dom::add_class(&target, &class));
                    observer.unobserve(&target);
                }
            });
        let options = IntersectionObserverInit::new();
        options.set_threshold(&self.config.reveal.threshold.into());
        options.set_root_margin(&self.config.reveal.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| UiError::js("IntersectionObserver", err))?;
        Ok(RevealObserver {
            observer,
            _callback: callback,
        })
    }

    pub(super) fn stagger_nav(&self) {
        let nav = &self.config.nav;
        for (index, item) in dom::query_all(&self.document, &nav.selector)
            .iter()
            .enumerate()
        {
            dom::log_result(dom::set_style(item, "animation-delay", &nav.delay_for(index)));
            dom::log_result(dom::add_class(item, &nav.class));
        }
    }
}
