#![allow(dead_code)]

use controller::memory_surface::MemoryElement;
use controller::memory_surface::MemorySurface;
use controller::ControllerConfig;
use controller::InteractionDriver;

pub const BUTTON: &str = "mobile-menu-btn";
pub const MENU: &str = "mobile-menu";
pub const HEADER: &str = "site-header";
pub const CTA: &str = "header-cta";

/// A page with the full site shell: header, CTA, mobile menu, two animated
/// sections and a contact form container.
pub fn site_page(path: &str) -> MemorySurface {
    let mut page = MemorySurface::new(path);
    page.insert(HEADER, MemoryElement::new("header"))
        .insert(CTA, MemoryElement::new("a").child_of(HEADER).attr("href", "/contact"))
        .insert(BUTTON, MemoryElement::new("button").child_of(HEADER))
        .insert("menu-icon", MemoryElement::new("svg").child_of(BUTTON))
        .insert(MENU, MemoryElement::new("div").child_of(HEADER).class("hidden"))
        .insert(
            "menu-pricing",
            MemoryElement::new("a").child_of(MENU).attr("href", "/pricing"),
        )
        .insert("main", MemoryElement::new("main"))
        .insert("intro", MemoryElement::new("p").child_of("main").at(80.0))
        .insert(
            "jump",
            MemoryElement::new("a").child_of("main").attr("href", "#section-2").at(120.0),
        )
        .insert(
            "section-1",
            MemoryElement::new("section").child_of("main").attr("data-animate", "").at(600.0),
        )
        .insert(
            "section-2",
            MemoryElement::new("section").child_of("main").attr("data-animate", "").at(1400.0),
        )
        .insert("contact-form-container", MemoryElement::new("div").child_of("main").at(2000.0));
    page
}

/// A page without any mobile menu markup.
pub fn bare_page(path: &str) -> MemorySurface {
    let mut page = MemorySurface::new(path);
    page.insert("main", MemoryElement::new("main"))
        .insert("intro", MemoryElement::new("p").child_of("main"));
    page
}

pub fn started(page: MemorySurface) -> InteractionDriver<MemorySurface> {
    let config = ControllerConfig::default();
    let snapshot = page.snapshot(&config);
    let mut driver = InteractionDriver::new(config, page);
    driver.start(&snapshot);
    driver
}
