use crate::element::ElementKey;

/// A presentation change requested by the reducer.
///
/// Commands name *what* should be visible; [`crate::surface::apply`] decides
/// which classes, attributes and styles express it.
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    /// Show or hide the menu and set the button's `aria-expanded` to match.
    SyncMenu {
        button: ElementKey,
        menu: ElementKey,
        open: bool,
    },
    Focus(ElementKey),
    SetHeaderElevated {
        header: ElementKey,
        elevated: bool,
    },
    /// Visible CTAs are interactive, hidden ones ignore pointer events.
    SetCtaVisible {
        cta: ElementKey,
        visible: bool,
    },
    Observe(ElementKey),
    Unobserve(ElementKey),
    Reveal(ElementKey),
    SetBusy {
        target: ElementKey,
        busy: bool,
    },
    ReportError(String),
    /// Suppress the browser's default handling of the current event.
    PreventDefault,
    /// Smooth-scroll to the element with this id and focus it.
    ScrollToAndFocus {
        id: String,
    },
    /// Focus the outcome message inside `container`, if one is rendered.
    FocusFormStatus {
        container: ElementKey,
    },
}
