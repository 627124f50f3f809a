use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

/// Debug builds also trace every page event the controller handles.
const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(LOG_LEVEL).expect("failed to init logger");
    dioxus::launch(Site);
}

#[component]
fn Site() -> Element {
    ui::App()
}
