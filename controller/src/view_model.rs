//! Typed UI state owned by a running controller.

use std::collections::BTreeSet;

use crate::element::ElementKey;
use crate::event::MenuBinding;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Elements the controller manages on the current page.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Bindings {
    pub menu: Option<MenuBinding>,
    pub header: Option<ElementKey>,
    /// Only bound on the home route.
    pub cta: Option<ElementKey>,
    pub contact_form_container: ElementKey,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewModel {
    pub bindings: Bindings,
    pub menu: MenuState,
    pub header_elevated: bool,
    /// `None` when the CTA is not managed on this page.
    pub cta_visible: Option<bool>,
    pub pending_reveal: BTreeSet<ElementKey>,
    pub revealed: BTreeSet<ElementKey>,
    pub busy: BTreeSet<ElementKey>,
}

impl ViewModel {
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_revealed(&self, element: &ElementKey) -> bool {
        self.revealed.contains(element)
    }

    pub fn is_busy(&self, element: &ElementKey) -> bool {
        self.busy.contains(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed_and_unbound() {
        let state = ViewModel::default();
        assert!(!state.menu_open());
        assert!(state.bindings.menu.is_none());
        assert_eq!(state.bindings.contact_form_container, ElementKey::default());
        assert!(state.pending_reveal.is_empty());
    }
}
