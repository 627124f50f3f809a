//! Input notifications delivered to the controller.
//!
//! Adapters resolve anything that needs the live document (which region a
//! click landed in, which element an observer entry refers to) before
//! building a [`PageEvent`], so the reducer never touches the page itself.

use crate::element::ElementKey;

/// The mobile menu pair. Only present when both elements exist.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuBinding {
    pub button: ElementKey,
    pub menu: ElementKey,
}

/// What the page looked like when the controller was started.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PageSnapshot {
    pub path: String,
    pub scroll_offset: f64,
    pub menu: Option<MenuBinding>,
    pub header: Option<ElementKey>,
    pub cta: Option<ElementKey>,
    /// Elements marked for reveal-on-scroll.
    pub animated: Vec<ElementKey>,
}

/// Where a pointer activation landed relative to the mobile menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum PointerRegion {
    /// On (or inside) the menu toggle button.
    ToggleButton,
    /// On a link inside the menu.
    MenuLink,
    /// Inside the menu, but not on a link.
    Menu,
    /// Anywhere else on the page.
    Outside,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageEvent {
    Pointer(PointerRegion),
    Key(Key),
    Scroll { offset: f64 },
    /// A same-page link was activated. `href` is the raw attribute value.
    Anchor { href: String },
    /// An observed element's visibility crossed the observer threshold.
    Visibility { element: ElementKey, visible: bool },
    UpdateBegin { target: Option<ElementKey> },
    UpdateEnd { target: Option<ElementKey> },
    UpdateError { target: Option<ElementKey>, error: String },
    /// New content was swapped into `target`.
    AfterSwap { target: Option<ElementKey> },
}
