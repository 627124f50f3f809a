use controller::route::navigation;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            nav {
                "aria-label": "Footer",
                ul {
                    for page in navigation() {
                        li {
                            Link {
                                to: Route::from(page),
                                "{page.name()}"
                            }
                        }
                    }
                }
            }
            p {
                "On-premise mobile device lab management."
            }
        }
    }
}
