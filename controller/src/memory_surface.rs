//! In-memory page used by tests and headless hosts.
//!
//! Elements form a tree through their `parent` links and keep insertion
//! order as document order. Geometry is a single `top` coordinate per
//! element, measured from the document top.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use dioxus_logger::tracing::error;

use crate::config::ControllerConfig;
use crate::element::ElementKey;
use crate::event::MenuBinding;
use crate::event::PageSnapshot;
use crate::event::PointerRegion;
use crate::surface::Surface;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct MemoryElement {
    pub tag: String,
    pub parent: Option<ElementKey>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub top: f64,
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn child_of(mut self, parent: impl Into<ElementKey>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Supports `#id`, `.class`, `[attr]`, `[attr="value"]` and bare tag names.
    fn matches(&self, key: &ElementKey, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            return key.as_str() == id;
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.classes.contains(class);
        }
        if let Some(inner) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return match inner.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim_matches(|c| c == '"' || c == '\'');
                    self.attributes.get(name).is_some_and(|v| v == value)
                }
                None => self.attributes.contains_key(inner),
            };
        }
        self.tag.eq_ignore_ascii_case(selector)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    path: String,
    order: Vec<ElementKey>,
    elements: BTreeMap<ElementKey, MemoryElement>,
    focused: Option<ElementKey>,
    focus_scroll_prevented: bool,
    scroll_offset: f64,
    observed: BTreeSet<ElementKey>,
    errors: Vec<String>,
}

impl MemorySurface {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Default::default()
        }
    }

    /// Appends an element. Re-inserting a key replaces it in place.
    pub fn insert(&mut self, key: impl Into<ElementKey>, element: MemoryElement) -> &mut Self {
        let key = key.into();
        if self.elements.insert(key.clone(), element).is_none() {
            self.order.push(key);
        }
        self
    }

    pub fn element(&self, key: &ElementKey) -> Option<&MemoryElement> {
        self.elements.get(key)
    }

    pub fn has_class(&self, key: &ElementKey, class: &str) -> bool {
        self.element(key).is_some_and(|el| el.classes.contains(class))
    }

    pub fn style(&self, key: &ElementKey, property: &str) -> Option<&str> {
        self.element(key)?.styles.get(property).map(String::as_str)
    }

    pub fn focused(&self) -> Option<&ElementKey> {
        self.focused.as_ref()
    }

    /// Whether the last programmatic focus asked the browser not to scroll.
    pub fn focus_scroll_prevented(&self) -> bool {
        self.focus_scroll_prevented
    }

    /// Moves focus as a visitor would, e.g. by tabbing.
    pub fn set_focus(&mut self, key: Option<ElementKey>) {
        self.focused = key;
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Element top relative to the viewport top.
    pub fn bounding_top(&self, key: &ElementKey) -> Option<f64> {
        Some(self.element(key)?.top - self.scroll_offset)
    }

    pub fn is_observed(&self, key: &ElementKey) -> bool {
        self.observed.contains(key)
    }

    pub fn observed(&self) -> impl Iterator<Item = &ElementKey> {
        self.observed.iter()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn is_within(&self, key: &ElementKey, ancestor: &ElementKey) -> bool {
        let mut current = Some(key);
        while let Some(k) = current {
            if k == ancestor {
                return true;
            }
            current = self.elements.get(k).and_then(|el| el.parent.as_ref());
        }
        false
    }

    /// Nearest ancestor-or-self with the given tag.
    fn closest_tag<'a>(&'a self, key: &'a ElementKey, tag: &str) -> Option<&'a ElementKey> {
        let mut current = Some(key);
        while let Some(k) = current {
            let el = self.elements.get(k)?;
            if el.tag.eq_ignore_ascii_case(tag) {
                return Some(k);
            }
            current = el.parent.as_ref();
        }
        None
    }

    /// Describes the page the way a DOM adapter would at document-ready.
    pub fn snapshot(&self, config: &ControllerConfig) -> PageSnapshot {
        let button = ElementKey::new(config.ids.menu_button.clone());
        let menu = ElementKey::new(config.ids.menu.clone());
        let cta = ElementKey::new(config.ids.header_cta.clone());

        PageSnapshot {
            path: self.path.clone(),
            scroll_offset: self.scroll_offset,
            menu: (self.exists(&button) && self.exists(&menu)).then_some(MenuBinding { button, menu }),
            header: self
                .order
                .iter()
                .find(|k| self.elements[*k].matches(k, &config.selectors.header))
                .cloned(),
            cta: self.exists(&cta).then_some(cta),
            animated: self
                .order
                .iter()
                .filter(|k| self.elements[*k].matches(k, &config.selectors.animated))
                .cloned()
                .collect(),
        }
    }

    /// Classifies a click on `target` relative to the mobile menu.
    pub fn classify_click(&self, target: &ElementKey, config: &ControllerConfig) -> PointerRegion {
        let button = ElementKey::new(config.ids.menu_button.clone());
        let menu = ElementKey::new(config.ids.menu.clone());
        if self.is_within(target, &button) {
            PointerRegion::ToggleButton
        } else if self.is_within(target, &menu) {
            match self.closest_tag(target, "a") {
                Some(link) if self.is_within(link, &menu) => PointerRegion::MenuLink,
                _ => PointerRegion::Menu,
            }
        } else {
            PointerRegion::Outside
        }
    }

    /// The `href` of the same-page link enclosing `target`, if any.
    pub fn anchor_href(&self, target: &ElementKey) -> Option<String> {
        let link = self.closest_tag(target, "a")?;
        let href = self.elements.get(link)?.attributes.get("href")?;
        href.starts_with('#').then(|| href.clone())
    }
}

impl Surface for MemorySurface {
    fn exists(&self, element: &ElementKey) -> bool {
        self.elements.contains_key(element)
    }

    fn attribute(&self, element: &ElementKey, name: &str) -> Option<String> {
        self.element(element)?.attributes.get(name).cloned()
    }

    fn is_focusable(&self, element: &ElementKey) -> bool {
        let Some(el) = self.element(element) else {
            return false;
        };
        el.attributes.contains_key("tabindex")
            || matches!(
                el.tag.to_ascii_lowercase().as_str(),
                "button" | "input" | "select" | "textarea"
            )
            || (el.tag.eq_ignore_ascii_case("a") && el.attributes.contains_key("href"))
    }

    fn add_class(&mut self, element: &ElementKey, class: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &ElementKey, class: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.classes.remove(class);
        }
    }

    fn set_attribute(&mut self, element: &ElementKey, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&mut self, element: &ElementKey, property: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn focus(&mut self, element: &ElementKey) {
        if self.exists(element) {
            self.focused = Some(element.clone());
            self.focus_scroll_prevented = false;
        }
    }

    fn focus_in_place(&mut self, element: &ElementKey) {
        if self.exists(element) {
            self.focused = Some(element.clone());
            self.focus_scroll_prevented = true;
        }
    }

    fn scroll_into_view(&mut self, element: &ElementKey) {
        if let Some(top) = self.element(element).map(|el| el.top) {
            self.set_scroll_offset(top);
        }
    }

    fn observe(&mut self, element: &ElementKey) {
        if self.exists(element) {
            self.observed.insert(element.clone());
        }
    }

    fn unobserve(&mut self, element: &ElementKey) {
        self.observed.remove(element);
    }

    fn find_within(&mut self, container: &ElementKey, selectors: &[String]) -> Option<ElementKey> {
        self.order
            .iter()
            .filter(|k| *k != container && self.is_within(k, container))
            .find(|k| {
                selectors
                    .iter()
                    .any(|selector| self.elements[*k].matches(k, selector))
            })
            .cloned()
    }

    fn report_error(&mut self, message: &str) {
        error!("{message}");
        self.errors.push(message.to_string());
    }
}
