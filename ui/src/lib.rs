// The client-side Dioxus site shell.

use dioxus::prelude::*;

mod components;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod dom;
pub mod hooks;
mod screens;

use components::page_interactions::PageInteractions;
use components::site_footer::SiteFooter;
use components::site_header::SiteHeader;
use controller::route::SitePage;
use screens::about::About;
use screens::contact::Contact;
use screens::features::Features;
use screens::home::Home;
use screens::pricing::Pricing;
use screens::security::Security;

/// Client-side routes. Each maps to one [`SitePage`].
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/features")]
        Features {},
        #[route("/pricing")]
        Pricing {},
        #[route("/security")]
        Security {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
}

impl From<SitePage> for Route {
    fn from(page: SitePage) -> Self {
        match page {
            SitePage::Home => Route::Home {},
            SitePage::Features => Route::Features {},
            SitePage::Pricing => Route::Pricing {},
            SitePage::Security => Route::Security {},
            SitePage::About => Route::About {},
            SitePage::Contact => Route::Contact {},
        }
    }
}

/// Header, page content and footer. Page interactions are re-bound on every
/// route change by keying them on the path.
#[component]
fn SiteLayout() -> Element {
    let path = use_route::<Route>().to_string();

    rsx! {
        SiteHeader {
            path: path.clone(),
        }
        main {
            id: "main-content",
            Outlet::<Route> {}
        }
        SiteFooter {}
        PageInteractions {
            key: "{path}",
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Presentation for the classes the page controller toggles.
    let interaction_css = r#"
    .hidden { display: none !important; }

    header.site-header {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.95);
        transition: box-shadow 0.2s ease;
    }
    header.site-header.shadow-md {
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    }

    #header-cta { transition: opacity 0.3s ease; }

    [data-animate] { opacity: 0; }
    .animate-fade-in { animation: fade-in 0.6s ease-out forwards; }
    @keyframes fade-in {
        from { opacity: 0; transform: translateY(1rem); }
        to { opacity: 1; transform: none; }
    }

    .opacity-50 { opacity: 0.5; }

    @media (min-width: 768px) {
        .md-hidden { display: none !important; }
    }
    @media (max-width: 767px) {
        .desktop-only { display: none !important; }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{interaction_css}"
        }
        Router::<Route> {}
    }
}
