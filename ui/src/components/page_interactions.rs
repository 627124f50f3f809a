use dioxus::prelude::*;

use crate::hooks::use_page_interactions::use_page_interactions;

/// Binds the page controller to the currently rendered page for as long as
/// this component is mounted. Renders nothing.
#[component]
pub fn PageInteractions() -> Element {
    use_page_interactions();
    rsx! {}
}
