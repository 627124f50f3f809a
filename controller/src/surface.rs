//! The page capabilities the controller consumes, and the adapter that
//! projects [`Command`]s onto them.
//!
//! Implementations must treat an unknown [`ElementKey`] as a no-op for every
//! mutating method. The controller relies on that for pages that lack some
//! of the elements it knows about.

use dioxus_logger::tracing::error;

use crate::command::Command;
use crate::config::ControllerConfig;
use crate::element::ElementKey;

pub trait Surface {
    fn exists(&self, element: &ElementKey) -> bool;

    fn attribute(&self, element: &ElementKey, name: &str) -> Option<String>;

    /// Whether the element can take keyboard focus without a `tabindex`.
    fn is_focusable(&self, element: &ElementKey) -> bool;

    fn add_class(&mut self, element: &ElementKey, class: &str);

    fn remove_class(&mut self, element: &ElementKey, class: &str);

    fn set_attribute(&mut self, element: &ElementKey, name: &str, value: &str);

    fn set_style(&mut self, element: &ElementKey, property: &str, value: &str);

    fn focus(&mut self, element: &ElementKey);

    /// Focuses without letting the browser scroll the element into view.
    fn focus_in_place(&mut self, element: &ElementKey) {
        self.focus(element);
    }

    /// Smoothly scrolls so the element's top edge meets the viewport top.
    fn scroll_into_view(&mut self, element: &ElementKey);

    fn observe(&mut self, element: &ElementKey);

    fn unobserve(&mut self, element: &ElementKey);

    /// First descendant of `container`, in document order, matching any of `selectors`.
    fn find_within(&mut self, container: &ElementKey, selectors: &[String]) -> Option<ElementKey>;

    /// Operator-facing diagnostics. Never shown to visitors.
    fn report_error(&mut self, message: &str) {
        error!("{message}");
    }
}

/// What the host must do with the event that produced the commands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Applied {
    pub default_prevented: bool,
}

/// Applies `commands` in order.
pub fn apply<S: Surface + ?Sized>(
    surface: &mut S,
    commands: &[Command],
    config: &ControllerConfig,
) -> Applied {
    let mut applied = Applied::default();
    for command in commands {
        match command {
            Command::SyncMenu { button, menu, open } => {
                if !surface.exists(button) || !surface.exists(menu) {
                    continue;
                }
                if *open {
                    surface.remove_class(menu, &config.classes.menu_hidden);
                } else {
                    surface.add_class(menu, &config.classes.menu_hidden);
                }
                surface.set_attribute(button, "aria-expanded", bool_attr(*open));
            }
            Command::Focus(element) => surface.focus(element),
            Command::SetHeaderElevated { header, elevated } => {
                if *elevated {
                    surface.add_class(header, &config.classes.header_elevated);
                } else {
                    surface.remove_class(header, &config.classes.header_elevated);
                }
            }
            Command::SetCtaVisible { cta, visible } => {
                let (opacity, pointer_events) = if *visible { ("1", "auto") } else { ("0", "none") };
                surface.set_style(cta, "opacity", opacity);
                surface.set_style(cta, "pointer-events", pointer_events);
            }
            Command::Observe(element) => surface.observe(element),
            Command::Unobserve(element) => surface.unobserve(element),
            Command::Reveal(element) => surface.add_class(element, &config.classes.revealed),
            Command::SetBusy { target, busy } => {
                if *busy {
                    surface.add_class(target, &config.classes.busy);
                } else {
                    surface.remove_class(target, &config.classes.busy);
                }
                surface.set_attribute(target, "aria-busy", bool_attr(*busy));
            }
            Command::ReportError(message) => surface.report_error(message),
            Command::PreventDefault => applied.default_prevented = true,
            Command::ScrollToAndFocus { id } => {
                let target = ElementKey::new(id.clone());
                if surface.exists(&target) {
                    surface.scroll_into_view(&target);
                    make_focusable(surface, &target);
                    surface.focus_in_place(&target);
                }
            }
            Command::FocusFormStatus { container } => {
                if let Some(status) = surface.find_within(container, &config.selectors.form_status) {
                    make_focusable(surface, &status);
                    surface.focus(&status);
                }
            }
        }
    }
    applied
}

fn make_focusable<S: Surface + ?Sized>(surface: &mut S, element: &ElementKey) {
    if !surface.is_focusable(element) {
        surface.set_attribute(element, "tabindex", "-1");
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
