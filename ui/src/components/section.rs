//! Building blocks for page shells.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A page section that fades in the first time it scrolls into view.
///
/// Marked with `data-animate`, which the page controller observes.
#[component]
pub fn RevealSection(id: String, title: String, children: Element) -> Element {
    rsx! {
        section {
            id: "{id}",
            "data-animate": "true",
            h2 { "{title}" }
            {children}
        }
    }
}

/// In-page table of contents made of same-page anchor links.
#[component]
pub fn SectionNav(sections: Vec<(String, String)>) -> Element {
    rsx! {
        nav {
            class: "section-nav",
            "aria-label": "On this page",
            ul {
                for (id, label) in sections {
                    li {
                        a {
                            href: "#{id}",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
