//=============================================================================
// File: src/hooks/use_page_interactions.rs
//=============================================================================

// Conditionally export the correct module based on the target platform,
// following the same pattern as the DOM adapter in `dom/`.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use self::wasm32::*;

// Server-side rendering and native builds have no live document to bind to.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub use self::fallback::*;

/// # WebAssembly (WASM) Implementation
/// Attaches the page controller to the live DOM after the component mounts
/// and detaches every listener when it unmounts.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod wasm32 {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;
    use dioxus_logger::tracing::warn;

    use crate::dom::binding::DomBinding;
    use crate::dom::binding::load_config;

    pub fn use_page_interactions() {
        let binding = use_hook(|| Rc::new(RefCell::new(None::<DomBinding>)));

        let slot = binding.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            match DomBinding::attach(load_config()) {
                Ok(attached) => *slot.borrow_mut() = Some(attached),
                Err(e) => warn!("page interactions unavailable: {e}"),
            }
        });

        use_drop(move || {
            if let Some(attached) = binding.borrow_mut().take() {
                attached.detach();
            }
        });
    }
}

/// # Fallback Implementation
/// Nothing to bind outside the browser.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
mod fallback {
    pub fn use_page_interactions() {}
}
