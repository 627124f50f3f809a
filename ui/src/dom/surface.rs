use std::cell::RefCell;

use controller::event::MenuBinding;
use controller::event::PageSnapshot;
use controller::event::PointerRegion;
use controller::ControllerConfig;
use controller::ElementKey;
use controller::KeyAllocator;
use controller::Surface;
use dioxus_logger::tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::Document;
use web_sys::Element;
use web_sys::FocusOptions;
use web_sys::HtmlElement;
use web_sys::IntersectionObserver;
use web_sys::Node;
use web_sys::ScrollBehavior;
use web_sys::ScrollIntoViewOptions;
use web_sys::ScrollLogicalPosition;
use web_sys::Window;

/// Attribute holding the synthetic key of elements without an `id`.
const KEY_ATTRIBUTE: &str = "data-pc-key";

/// [`Surface`] over the live document.
pub struct DomSurface {
    window: Window,
    document: Document,
    observer: Option<IntersectionObserver>,
    keys: RefCell<KeyAllocator>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            observer: None,
            keys: RefCell::new(KeyAllocator::default()),
        }
    }

    pub fn set_observer(&mut self, observer: IntersectionObserver) {
        self.observer = Some(observer);
    }

    pub fn observer(&self) -> Option<&IntersectionObserver> {
        self.observer.as_ref()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Key for `element`, assigning a synthetic one if it has no `id`.
    pub fn key_for(&self, element: &Element) -> ElementKey {
        let id = element.id();
        if !id.is_empty() {
            return ElementKey::new(id);
        }
        if let Some(key) = element.get_attribute(KEY_ATTRIBUTE) {
            return ElementKey::new(key);
        }
        let key = self.keys.borrow_mut().next_free(|k| self.element(k).is_some());
        log_js_error("set key attribute", element.set_attribute(KEY_ATTRIBUTE, key.as_str()));
        key
    }

    fn element(&self, key: &ElementKey) -> Option<Element> {
        if let Some(element) = self.document.get_element_by_id(key.as_str()) {
            return Some(element);
        }
        if !key.is_synthetic() {
            return None;
        }
        self.document
            .query_selector(&format!("[{KEY_ATTRIBUTE}=\"{key}\"]"))
            .ok()
            .flatten()
    }

    fn html_element(&self, key: &ElementKey) -> Option<HtmlElement> {
        self.element(key)?.dyn_into::<HtmlElement>().ok()
    }

    /// Describes the page at document-ready.
    pub fn snapshot(&self, config: &ControllerConfig) -> PageSnapshot {
        let button = ElementKey::new(config.ids.menu_button.clone());
        let menu = ElementKey::new(config.ids.menu.clone());
        let cta = ElementKey::new(config.ids.header_cta.clone());

        let header = self
            .document
            .query_selector(&config.selectors.header)
            .ok()
            .flatten()
            .map(|header| self.key_for(&header));

        let mut animated = Vec::new();
        if let Ok(nodes) = self.document.query_selector_all(&config.selectors.animated) {
            for i in 0..nodes.length() {
                if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    animated.push(self.key_for(&element));
                }
            }
        }

        PageSnapshot {
            path: self.window.location().pathname().unwrap_or_default(),
            scroll_offset: self.scroll_offset(),
            menu: (self.exists(&button) && self.exists(&menu)).then_some(MenuBinding { button, menu }),
            header,
            cta: self.exists(&cta).then_some(cta),
            animated,
        }
    }

    /// Where a click on `target` landed relative to the mobile menu.
    pub fn classify_click(&self, target: Option<&Node>, config: &ControllerConfig) -> PointerRegion {
        let button = self.document.get_element_by_id(&config.ids.menu_button);
        let menu = self.document.get_element_by_id(&config.ids.menu);

        if button.as_ref().is_some_and(|b| b.contains(target)) {
            return PointerRegion::ToggleButton;
        }
        let Some(menu) = menu.filter(|m| m.contains(target)) else {
            return PointerRegion::Outside;
        };
        let link = target
            .and_then(|node| node.dyn_ref::<Element>())
            .and_then(|element| element.closest("a").ok().flatten());
        match link {
            Some(link) => {
                let link: &Node = &link;
                if menu.contains(Some(link)) {
                    PointerRegion::MenuLink
                } else {
                    PointerRegion::Menu
                }
            }
            None => PointerRegion::Menu,
        }
    }

    /// The `href` of the same-page link enclosing `target`, if any.
    pub fn anchor_href(&self, target: Option<&Node>, config: &ControllerConfig) -> Option<String> {
        let element = target?.dyn_ref::<Element>()?;
        let link = element.closest(&config.selectors.anchor_links).ok().flatten()?;
        link.get_attribute("href")
    }

    /// Reads an element reference out of a JS value, e.g. `event.detail.target`.
    pub fn key_from_js(&self, value: &JsValue) -> Option<ElementKey> {
        value
            .dyn_ref::<Element>()
            .map(|element| self.key_for(element))
    }
}

impl Surface for DomSurface {
    fn exists(&self, element: &ElementKey) -> bool {
        self.element(element).is_some()
    }

    fn attribute(&self, element: &ElementKey, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn is_focusable(&self, element: &ElementKey) -> bool {
        let Some(el) = self.element(element) else {
            return false;
        };
        el.has_attribute("tabindex")
            || matches!(
                el.tag_name().to_ascii_uppercase().as_str(),
                "BUTTON" | "INPUT" | "SELECT" | "TEXTAREA"
            )
            || (el.tag_name().eq_ignore_ascii_case("a") && el.has_attribute("href"))
    }

    fn add_class(&mut self, element: &ElementKey, class: &str) {
        if let Some(el) = self.element(element) {
            log_js_error("add class", el.class_list().add_1(class));
        }
    }

    fn remove_class(&mut self, element: &ElementKey, class: &str) {
        if let Some(el) = self.element(element) {
            log_js_error("remove class", el.class_list().remove_1(class));
        }
    }

    fn set_attribute(&mut self, element: &ElementKey, name: &str, value: &str) {
        if let Some(el) = self.element(element) {
            log_js_error("set attribute", el.set_attribute(name, value));
        }
    }

    fn set_style(&mut self, element: &ElementKey, property: &str, value: &str) {
        if let Some(el) = self.html_element(element) {
            log_js_error("set style", el.style().set_property(property, value));
        }
    }

    fn focus(&mut self, element: &ElementKey) {
        if let Some(el) = self.html_element(element) {
            log_js_error("focus", el.focus());
        }
    }

    fn focus_in_place(&mut self, element: &ElementKey) {
        if let Some(el) = self.html_element(element) {
            let options = FocusOptions::new();
            options.set_prevent_scroll(true);
            log_js_error("focus", el.focus_with_options(&options));
        }
    }

    fn scroll_into_view(&mut self, element: &ElementKey) {
        if let Some(el) = self.element(element) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn observe(&mut self, element: &ElementKey) {
        if let (Some(observer), Some(el)) = (&self.observer, self.element(element)) {
            observer.observe(&el);
        }
    }

    fn unobserve(&mut self, element: &ElementKey) {
        if let (Some(observer), Some(el)) = (&self.observer, self.element(element)) {
            observer.unobserve(&el);
        }
    }

    fn find_within(&mut self, container: &ElementKey, selectors: &[String]) -> Option<ElementKey> {
        let container = self.element(container)?;
        let found = container.query_selector(&selectors.join(", ")).ok().flatten()?;
        Some(self.key_for(&found))
    }
}

fn log_js_error(context: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        debug!("{context} failed: {err:?}");
    }
}
