use crate::components::section::RevealSection;
use crate::components::section::SectionNav;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        document::Title { "About Us - RobusTest" }
        h1 { "About Us" }
        SectionNav {
            sections: vec![
                ("mission".to_string(), "Mission".to_string()),
                ("team".to_string(), "Team".to_string()),
            ],
        }
        RevealSection {
            id: "mission",
            title: "Mission",
            p { "Make real-device testing practical for teams that cannot use a public cloud." }
        }
        RevealSection {
            id: "team",
            title: "Team",
            p { "Engineers who have run device labs for some of the largest app publishers." }
        }
    }
}
