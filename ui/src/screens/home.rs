//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::section::RevealSection;
use crate::components::section::SectionNav;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Title { "RobusTest - On-Premise Mobile Device Lab" }
        section {
            class: "hero",
            h1 { "Your own mobile device lab, on your own network" }
            Link {
                class: "cta-button",
                to: Route::Contact {},
                "Request Demo"
            }
            SectionNav {
                sections: vec![
                    ("how-it-works".to_string(), "How it works".to_string()),
                    ("why-on-premise".to_string(), "Why on-premise".to_string()),
                ],
            }
        }
        RevealSection {
            id: "how-it-works",
            title: "How it works",
            p { "Connect real devices to a lab server inside your network and test against them from anywhere." }
        }
        RevealSection {
            id: "why-on-premise",
            title: "Why on-premise",
            p { "Devices, builds and test data never leave your infrastructure." }
        }
    }
}
