//=============================================================================
// File: src/components/site_header.rs
//=============================================================================

//! The fixed site header: logo, desktop navigation, "Request Demo" CTA and
//! the mobile menu.
//!
//! The mobile menu's open state is *not* held in a signal. The page
//! controller owns it and toggles the `hidden` class and `aria-expanded`
//! directly, so the markup rendered here is only the closed initial state.

use controller::route::navigation;
use controller::route::SitePage;
use controller::ControllerConfig;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SiteHeader(path: String) -> Element {
    let ids = ControllerConfig::default().ids;

    rsx! {
        header {
            class: "site-header",
            nav {
                class: "site-nav",
                Link {
                    class: "site-logo",
                    to: Route::Home {},
                    "RobusTest"
                }

                ul {
                    class: "desktop-only",
                    for page in navigation() {
                        li {
                            NavLink {
                                page,
                                path: path.clone(),
                            }
                        }
                    }
                }

                Link {
                    id: "{ids.header_cta}",
                    class: "desktop-only cta-button",
                    to: Route::Contact {},
                    "Request Demo"
                }

                button {
                    id: "{ids.menu_button}",
                    class: "md-hidden",
                    r#type: "button",
                    "aria-controls": "{ids.menu}",
                    "aria-expanded": "false",
                    "aria-label": "Toggle navigation menu",
                    "≡"
                }
            }

            div {
                id: "{ids.menu}",
                class: "hidden md-hidden",
                ul {
                    for page in navigation() {
                        li {
                            NavLink {
                                page,
                                path: path.clone(),
                            }
                        }
                    }
                    li {
                        Link {
                            class: "cta-button",
                            to: Route::Contact {},
                            "Request Demo"
                        }
                    }
                }
            }
        }
    }
}

/// One navigation entry, highlighted when `path` belongs to `page`.
#[component]
fn NavLink(page: SitePage, path: String) -> Element {
    let active = page.is_active(&path);
    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: Route::from(page),
            "{page.name()}"
        }
    }
}
