use crate::components::section::RevealSection;
use crate::components::section::SectionNav;
use dioxus::prelude::*;

#[component]
pub fn Security() -> Element {
    rsx! {
        document::Title { "Security - RobusTest" }
        h1 { "Security" }
        SectionNav {
            sections: vec![
                ("data-residency".to_string(), "Data residency".to_string()),
                ("access-control".to_string(), "Access control".to_string()),
            ],
        }
        RevealSection {
            id: "data-residency",
            title: "Data residency",
            p { "All artifacts stay on hardware you control." }
        }
        RevealSection {
            id: "access-control",
            title: "Access control",
            p { "Single sign-on and role-based permissions for every device." }
        }
    }
}
