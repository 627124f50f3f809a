use crate::components::section::RevealSection;
use crate::components::section::SectionNav;
use dioxus::prelude::*;

#[component]
pub fn Features() -> Element {
    rsx! {
        document::Title { "Features - RobusTest" }
        h1 { "Features" }
        SectionNav {
            sections: vec![
                ("capabilities".to_string(), "Capabilities".to_string()),
                ("integrations".to_string(), "Integrations".to_string()),
            ],
        }
        RevealSection {
            id: "capabilities",
            title: "Capabilities",
            p { "Remote device control, automation frameworks, and parallel test runs." }
        }
        RevealSection {
            id: "integrations",
            title: "Integrations",
            p { "Works with the CI pipelines and test runners your teams already use." }
        }
    }
}
