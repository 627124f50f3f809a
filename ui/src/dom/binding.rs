//! Listener registry connecting DOM events to the page controller.
//!
//! All closures share one [`InteractionDriver`] through `Rc<RefCell<..>>`
//! and hold it weakly, so dropping the [`DomBinding`] releases everything.
//! Dropping also removes every listener and disconnects the observer.

use std::cell::RefCell;
use std::rc::Rc;

use controller::event::Key;
use controller::event::PageEvent;
use controller::ControllerConfig;
use controller::ElementKey;
use controller::InteractionDriver;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use js_sys::Array;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use web_sys::CustomEvent;
use web_sys::Event;
use web_sys::EventTarget;
use web_sys::IntersectionObserver;
use web_sys::IntersectionObserverEntry;
use web_sys::IntersectionObserverInit;
use web_sys::KeyboardEvent;
use web_sys::Node;

use super::error::BindError;
use super::surface::DomSurface;

/// Id of the optional `<script type="application/json">` block holding a
/// [`ControllerConfig`].
const CONFIG_ELEMENT_ID: &str = "page-controller-config";

/// Intersection ratios come back from the browser with rounding error.
const RATIO_EPSILON: f64 = 1e-6;

type SharedDriver = Rc<RefCell<InteractionDriver<DomSurface>>>;

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// The controller attached to the live page.
pub struct DomBinding {
    driver: SharedDriver,
    listeners: Vec<Listener>,
    _observer_callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Reads the page's config block, falling back to defaults.
pub fn load_config() -> ControllerConfig {
    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json {
        None => ControllerConfig::default(),
        Some(json) => match ControllerConfig::from_json(&json) {
            Ok(config) => {
                info!("loaded page controller config from #{CONFIG_ELEMENT_ID}");
                config
            }
            Err(e) => {
                warn!("{e}; using default page controller config");
                ControllerConfig::default()
            }
        },
    }
}

impl DomBinding {
    /// Starts the controller on the current document and subscribes to its events.
    pub fn attach(config: ControllerConfig) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let document = window.document().ok_or(BindError::NoDocument)?;
        let body = document.body().ok_or(BindError::NoBody)?;

        let observer_options = IntersectionObserverInit::new();
        observer_options.set_root_margin(&config.reveal_root_margin);
        observer_options.set_threshold(&JsValue::from_f64(config.reveal_threshold));

        let driver: SharedDriver = Rc::new(RefCell::new(InteractionDriver::new(
            config,
            DomSurface::new(window.clone(), document.clone()),
        )));

        let observer_callback = {
            let weak = Rc::downgrade(&driver);
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    let Some(driver) = weak.upgrade() else {
                        return;
                    };
                    let Ok(mut driver) = driver.try_borrow_mut() else {
                        return;
                    };
                    let threshold = driver.config().reveal_threshold;
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        let element = driver.surface().key_for(&entry.target());
                        let visible = entry.is_intersecting()
                            && entry.intersection_ratio() + RATIO_EPSILON >= threshold;
                        driver.dispatch(&PageEvent::Visibility { element, visible });
                    }
                },
            )
        };
        let observer = IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &observer_options,
        )
        .map_err(|e| BindError::js("create intersection observer", e))?;
        driver.borrow_mut().surface_mut().set_observer(observer);

        let mut binding = Self {
            driver,
            listeners: Vec::new(),
            _observer_callback: observer_callback,
        };

        {
            let mut driver = binding.driver.borrow_mut();
            let snapshot = driver.surface().snapshot(driver.config());
            driver.start(&snapshot);
        }

        binding.listen(&document, "click", false, |driver, event| {
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            let region = driver.surface().classify_click(node, driver.config());
            driver.dispatch(&PageEvent::Pointer(region));

            if let Some(href) = driver.surface().anchor_href(node, driver.config()) {
                if driver.dispatch(&PageEvent::Anchor { href }).default_prevented {
                    event.prevent_default();
                }
            }
        })?;

        binding.listen(&document, "keydown", false, |driver, event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                driver.dispatch(&PageEvent::Key(Key::from_dom(&key.key())));
            }
        })?;

        binding.listen(&window, "scroll", true, |driver, _event| {
            let offset = driver.surface().scroll_offset();
            driver.dispatch(&PageEvent::Scroll { offset });
        })?;

        binding.listen(&body, "htmx:beforeRequest", false, |driver, event| {
            let target = detail_target(driver, &event);
            driver.dispatch(&PageEvent::UpdateBegin { target });
        })?;

        binding.listen(&body, "htmx:afterRequest", false, |driver, event| {
            let target = detail_target(driver, &event);
            driver.dispatch(&PageEvent::UpdateEnd { target });
        })?;

        binding.listen(&body, "htmx:responseError", false, |driver, event| {
            let target = detail_target(driver, &event);
            let error = detail_field(&event, "error")
                .and_then(|error| error.as_string())
                .unwrap_or_else(|| "unknown error".to_string());
            driver.dispatch(&PageEvent::UpdateError { target, error });
        })?;

        binding.listen(&body, "htmx:afterSwap", false, |driver, event| {
            let target = detail_target(driver, &event);
            driver.dispatch(&PageEvent::AfterSwap { target });
        })?;

        Ok(binding)
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        passive: bool,
        mut handler: impl FnMut(&mut InteractionDriver<DomSurface>, Event) + 'static,
    ) -> Result<(), BindError> {
        let weak = Rc::downgrade(&self.driver);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            let Ok(mut driver) = driver.try_borrow_mut() else {
                debug!("dropping re-entrant {} event", event.type_());
                return;
            };
            handler(&mut driver, event);
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| BindError::js("add event listener", e))?;

        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Stops the controller and releases the page.
    pub fn detach(self) {
        debug!("detaching {} page listeners", self.listeners.len());
        drop(self);
    }
}

impl Drop for DomBinding {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                debug!("remove {} listener failed: {err:?}", listener.kind);
            }
        }
        if let Ok(mut driver) = self.driver.try_borrow_mut() {
            driver.stop();
            if let Some(observer) = driver.surface().observer() {
                observer.disconnect();
            }
        }
    }
}

fn detail_field(event: &Event, name: &str) -> Option<JsValue> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    Reflect::get(&detail, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn detail_target(driver: &InteractionDriver<DomSurface>, event: &Event) -> Option<ElementKey> {
    detail_field(event, "target").and_then(|target| driver.surface().key_from_js(&target))
}
