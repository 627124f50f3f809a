//! The site's page list and the active-link rule used by the header.

use strum::IntoEnumIterator;

/// A top-level page of the site.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIter, strum::EnumIs)]
pub enum SitePage {
    Home,
    Features,
    Pricing,
    Security,
    About,
    Contact,
}

impl SitePage {
    /// Label shown in the navigation.
    pub fn name(&self) -> &'static str {
        match self {
            SitePage::Home => "Home",
            SitePage::Features => "Features",
            SitePage::Pricing => "Pricing",
            SitePage::Security => "Security",
            SitePage::About => "About",
            SitePage::Contact => "Contact",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::Features => "/features",
            SitePage::Pricing => "/pricing",
            SitePage::Security => "/security",
            SitePage::About => "/about",
            SitePage::Contact => "/contact",
        }
    }

    /// Whether this page's nav link is highlighted for `path`.
    ///
    /// Home matches only the root path exactly; every other page matches
    /// itself and anything below it.
    pub fn is_active(&self, path: &str) -> bool {
        match self {
            SitePage::Home => path == "/",
            page => {
                let href = page.href();
                path == href
                    || path
                        .strip_prefix(href)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Pages in navigation order.
pub fn navigation() -> impl Iterator<Item = SitePage> {
    SitePage::iter()
}
