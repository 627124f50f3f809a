use controller::ControllerConfig;
use dioxus::prelude::*;

/// Contact page. The form container is the swap target partial updates
/// render their outcome message into; the page controller moves focus to
/// that message once it arrives.
#[component]
pub fn Contact() -> Element {
    let container_id = ControllerConfig::default().ids.contact_form_container;

    rsx! {
        document::Title { "Contact - RobusTest" }
        h1 { "Request a demo" }
        div {
            id: "{container_id}",
            "aria-live": "polite",
            p {
                "Tell us about your device lab and we will get back to you within one business day, or write to "
                a { href: "mailto:hello@robustest.com", "hello@robustest.com" }
                "."
            }
        }
    }
}
