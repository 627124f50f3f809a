use crate::components::section::RevealSection;
use crate::components::section::SectionNav;
use dioxus::prelude::*;

#[component]
pub fn Pricing() -> Element {
    rsx! {
        document::Title { "Pricing - RobusTest" }
        h1 { "Pricing" }
        SectionNav {
            sections: vec![
                ("plans".to_string(), "Plans".to_string()),
                ("faq".to_string(), "FAQ".to_string()),
            ],
        }
        RevealSection {
            id: "plans",
            title: "Plans",
            p { "Licensing scales with the number of devices in your lab." }
        }
        RevealSection {
            id: "faq",
            title: "FAQ",
            p { "Answers to common questions about licensing and deployment." }
        }
    }
}
