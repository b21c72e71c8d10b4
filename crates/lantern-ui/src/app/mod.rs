//! Page controller: owns configuration, theme state, and every event listener.
//!
//! # Design
//! - One controller per page, reachable from scripts as `window.lantern`.
//! - Handlers hold a `Weak` reference; the methods on the published
//!   `window.lantern` object are the only strong owners.
//! - The install guard lives in Rust, so markup named `lantern` cannot
//!   suppress installation.
//! - Listeners are registered in initialization order, which is also dispatch order.

use crate::core::config::UiConfig;
use crate::core::error::UiError;
use crate::core::logic::InstallGuard;
use crate::core::theme::ThemeState;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Reflect;
use preferences::LocalThemeStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, EventTarget};

mod dom;
mod dropdown;
mod forms;
mod handle;
mod modal;
mod notify;
mod preferences;
mod reveal;
mod tables;
mod theme;
mod tooltip;

const GLOBAL_HANDLE: &str = "lantern";

pub(crate) struct UiController {
    config: UiConfig,
    document: Document,
    theme: RefCell<ThemeState<LocalThemeStore>>,
    theme_toggle: RefCell<Option<Element>>,
    reveal: RefCell<Option<reveal::RevealObserver>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl UiController {
    fn new(document: Document) -> Rc<Self> {
        let config = preferences::load_config(&document);
        let store = LocalThemeStore::new(config.storage_key.clone());
        let theme = ThemeState::resolve(store, preferences::system_prefers_dark());
        Rc::new(Self {
            config,
            document,
            theme: RefCell::new(theme),
            theme_toggle: RefCell::new(None),
            reveal: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn install(self: &Rc<Self>) {
        self.apply_initial_theme();
        self.bind_theme_toggle();
        self.bind_system_theme();
        self.bind_theme_shortcut();
        self.arm_reveal();
        self.stagger_nav();
        self.bind_modals();
        self.bind_dropdowns();
        self.bind_tooltips();
        self.bind_forms();
        self.bind_tables();
        console::debug!(
            "lantern: controller installed",
            self.listeners.borrow().len()
        );
    }

    /// Register a passive listener that lives as long as the controller.
    fn on<F>(self: &Rc<Self>, target: &EventTarget, event_type: &'static str, handler: F)
    where
        F: Fn(&Rc<Self>, &Event) + 'static,
    {
        self.listen(target, event_type, EventListenerOptions::default(), handler);
    }

    /// Register a listener allowed to call `preventDefault`.
    fn on_preventable<F>(self: &Rc<Self>, target: &EventTarget, event_type: &'static str, handler: F)
    where
        F: Fn(&Rc<Self>, &Event) + 'static,
    {
        self.listen(
            target,
            event_type,
            EventListenerOptions::enable_prevent_default(),
            handler,
        );
    }

    fn listen<F>(
        self: &Rc<Self>,
        target: &EventTarget,
        event_type: &'static str,
        options: EventListenerOptions,
        handler: F,
    ) where
        F: Fn(&Rc<Self>, &Event) + 'static,
    {
        let controller = Rc::downgrade(self);
        let listener =
            EventListener::new_with_options(target, event_type, options, move |event| {
                if let Some(controller) = controller.upgrade() {
                    handler(&controller, event);
                }
            });
        self.listeners.borrow_mut().push(listener);
    }
}

thread_local! {
    static INSTALL: InstallGuard = const { InstallGuard::new() };
}

fn start(document: &Document) {
    if !INSTALL.with(InstallGuard::claim) {
        console::warn!("lantern: controller already installed; keeping the first");
        return;
    }
    let controller = UiController::new(document.clone());
    controller.install();
    let published = dom::window().and_then(|window| {
        let handle = handle::build_handle(&controller)?;
        Reflect::set(&window, &JsValue::from_str(GLOBAL_HANDLE), &handle)
            .map(|_| ())
            .map_err(|err| UiError::js("publish handle", err))
    });
    dom::log_result(published);
}

/// Entrypoint invoked for wasm32 builds. Waits for `DOMContentLoaded` when the
/// document is still parsing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            dom::log_error(&err);
            return;
        }
    };
    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| start(&ready))
            .forget();
    } else {
        start(&document);
    }
}
