//! End-to-end scenarios against the in-memory page.

mod common;

use common::*;
use controller::event::Key;
use controller::event::PageEvent;
use controller::memory_surface::MemorySurface;
use controller::surface::Applied;
use controller::ElementKey;
use controller::InteractionDriver;
use pretty_assertions::assert_eq;

fn key(k: &str) -> ElementKey {
    ElementKey::from(k)
}

/// Clicks `target` the way the DOM adapter reports it: a pointer event,
/// followed by an anchor event when the click landed on a same-page link.
fn click(driver: &mut InteractionDriver<MemorySurface>, target: &str) -> Applied {
    let target = key(target);
    let region = driver.surface().classify_click(&target, driver.config());
    let mut applied = driver.dispatch(&PageEvent::Pointer(region));
    if let Some(href) = driver.surface().anchor_href(&target) {
        applied.default_prevented |= driver.dispatch(&PageEvent::Anchor { href }).default_prevented;
    }
    applied
}

fn menu_visible(driver: &InteractionDriver<MemorySurface>) -> bool {
    !driver.surface().has_class(&key(MENU), "hidden")
}

fn expanded(driver: &InteractionDriver<MemorySurface>) -> Option<String> {
    use controller::Surface;
    driver.surface().attribute(&key(BUTTON), "aria-expanded")
}

#[test]
fn menu_starts_closed_and_in_sync() {
    let driver = started(site_page("/"));
    assert!(!menu_visible(&driver));
    assert_eq!(expanded(&driver).as_deref(), Some("false"));
}

#[test]
fn toggle_flips_and_stays_paired() {
    let mut driver = started(site_page("/"));
    for expected in [true, false, true] {
        click(&mut driver, "menu-icon");
        assert_eq!(menu_visible(&driver), expected);
        assert_eq!(expanded(&driver).as_deref(), Some(if expected { "true" } else { "false" }));
    }
}

#[test]
fn outside_click_closes() {
    let mut driver = started(site_page("/"));
    click(&mut driver, BUTTON);
    click(&mut driver, "intro");
    assert!(!menu_visible(&driver));
    assert_eq!(expanded(&driver).as_deref(), Some("false"));
}

#[test]
fn menu_link_closes() {
    let mut driver = started(site_page("/"));
    click(&mut driver, BUTTON);
    click(&mut driver, "menu-pricing");
    assert!(!driver.controller().state().menu_open());
    assert!(!menu_visible(&driver));
}

#[test]
fn escape_closes_and_returns_focus() {
    let mut driver = started(site_page("/"));
    click(&mut driver, BUTTON);
    driver.surface_mut().set_focus(Some(key("menu-pricing")));

    driver.dispatch(&PageEvent::Key(Key::Escape));

    assert!(!menu_visible(&driver));
    assert_eq!(driver.surface().focused(), Some(&key(BUTTON)));
    assert!(!driver.surface().focus_scroll_prevented());
}

#[test]
fn escape_while_closed_leaves_focus_alone() {
    let mut driver = started(site_page("/"));
    driver.surface_mut().set_focus(Some(key("intro")));
    driver.dispatch(&PageEvent::Key(Key::Escape));
    assert_eq!(driver.surface().focused(), Some(&key("intro")));
}

#[test]
fn header_elevation_threshold() {
    let mut driver = started(site_page("/about"));
    let mut observed = Vec::new();
    for offset in [0.0, 50.0, 100.0, 101.0, 300.0, 0.0] {
        driver.dispatch(&PageEvent::Scroll { offset });
        observed.push(driver.surface().has_class(&key(HEADER), "shadow-md"));
    }
    assert_eq!(observed, [false, false, false, true, true, false]);
}

#[test]
fn home_cta_follows_scroll() {
    let mut driver = started(site_page("/"));
    assert_eq!(driver.surface().style(&key(CTA), "opacity"), Some("0"));
    assert_eq!(driver.surface().style(&key(CTA), "pointer-events"), Some("none"));

    let mut observed = Vec::new();
    for offset in [0.0, 300.0, 301.0, 50.0] {
        driver.dispatch(&PageEvent::Scroll { offset });
        observed.push(driver.controller().state().cta_visible == Some(true));
    }
    assert_eq!(observed, [false, false, true, false]);

    driver.dispatch(&PageEvent::Scroll { offset: 800.0 });
    assert_eq!(driver.surface().style(&key(CTA), "opacity"), Some("1"));
    assert_eq!(driver.surface().style(&key(CTA), "pointer-events"), Some("auto"));
}

#[test]
fn cta_untouched_off_home() {
    let mut driver = started(site_page("/security"));
    for offset in [0.0, 500.0, 10.0] {
        driver.dispatch(&PageEvent::Scroll { offset });
    }
    assert_eq!(driver.surface().style(&key(CTA), "opacity"), None);
    assert_eq!(driver.surface().style(&key(CTA), "pointer-events"), None);
}

#[test]
fn reveal_is_one_shot() {
    let mut driver = started(site_page("/"));
    let section = key("section-1");
    assert!(driver.surface().is_observed(&section));

    for visible in [true, false, true] {
        driver.dispatch(&PageEvent::Visibility {
            element: section.clone(),
            visible,
        });
    }

    assert!(driver.surface().has_class(&section, "animate-fade-in"));
    assert!(!driver.surface().is_observed(&section));
    assert!(driver.controller().state().is_revealed(&section));
    assert!(driver.surface().is_observed(&key("section-2")));
}

#[test]
fn unmarked_elements_are_untouched() {
    let mut driver = started(site_page("/"));
    driver.dispatch(&PageEvent::Visibility {
        element: key("intro"),
        visible: true,
    });
    assert!(!driver.surface().has_class(&key("intro"), "animate-fade-in"));
}

#[test]
fn busy_cleared_on_error() {
    use controller::Surface;
    let mut driver = started(site_page("/contact"));
    let target = Some(key("contact-form-container"));

    driver.dispatch(&PageEvent::UpdateBegin { target: target.clone() });
    assert!(driver.surface().has_class(&key("contact-form-container"), "opacity-50"));
    assert_eq!(
        driver.surface().attribute(&key("contact-form-container"), "aria-busy").as_deref(),
        Some("true")
    );

    driver.dispatch(&PageEvent::UpdateError {
        target,
        error: "HTTP 500".to_string(),
    });
    assert!(!driver.surface().has_class(&key("contact-form-container"), "opacity-50"));
    assert_eq!(
        driver.surface().attribute(&key("contact-form-container"), "aria-busy").as_deref(),
        Some("false")
    );
    assert_eq!(driver.surface().errors(), ["partial update failed: HTTP 500"]);
}

#[test]
fn busy_cleared_on_end() {
    use controller::Surface;
    let mut driver = started(site_page("/"));
    driver.dispatch(&PageEvent::UpdateBegin { target: Some(key("main")) });
    driver.dispatch(&PageEvent::UpdateEnd { target: Some(key("main")) });
    assert!(!driver.surface().has_class(&key("main"), "opacity-50"));
    assert_eq!(driver.surface().attribute(&key("main"), "aria-busy").as_deref(), Some("false"));
    assert!(driver.controller().state().busy.is_empty());
}

#[test]
fn anchor_scrolls_and_focuses() {
    use controller::Surface;
    let mut driver = started(site_page("/"));
    let applied = click(&mut driver, "jump");

    assert!(applied.default_prevented);
    assert_eq!(driver.surface().bounding_top(&key("section-2")), Some(0.0));
    assert_eq!(driver.surface().focused(), Some(&key("section-2")));
    assert!(driver.surface().focus_scroll_prevented());
    assert_eq!(
        driver.surface().attribute(&key("section-2"), "tabindex").as_deref(),
        Some("-1")
    );
}

#[test]
fn anchor_to_missing_target_only_prevents_default() {
    let mut driver = started(site_page("/"));
    driver.surface_mut().set_focus(Some(key("intro")));
    let applied = driver.dispatch(&PageEvent::Anchor {
        href: "#missing".to_string(),
    });

    assert!(applied.default_prevented);
    assert_eq!(driver.surface().scroll_offset(), 0.0);
    assert_eq!(driver.surface().focused(), Some(&key("intro")));
}

#[test]
fn bare_hash_keeps_default() {
    let mut driver = started(site_page("/"));
    let applied = driver.dispatch(&PageEvent::Anchor { href: "#".to_string() });
    assert!(!applied.default_prevented);
}

#[test]
fn contact_swap_focuses_status() {
    use controller::memory_surface::MemoryElement;
    let mut driver = started(site_page("/contact"));
    driver.surface_mut().insert(
        "thanks",
        MemoryElement::new("div")
            .child_of("contact-form-container")
            .class("success-message"),
    );

    driver.dispatch(&PageEvent::AfterSwap {
        target: Some(key("contact-form-container")),
    });

    assert_eq!(driver.surface().focused(), Some(&key("thanks")));
}

#[test]
fn contact_swap_focuses_first_status_in_document_order() {
    use controller::memory_surface::MemoryElement;
    let mut driver = started(site_page("/contact"));
    driver
        .surface_mut()
        .insert(
            "thanks",
            MemoryElement::new("div")
                .child_of("contact-form-container")
                .class("success-message"),
        )
        .insert(
            "hint",
            MemoryElement::new("p")
                .child_of("contact-form-container")
                .attr("role", "alert"),
        );

    driver.dispatch(&PageEvent::AfterSwap {
        target: Some(key("contact-form-container")),
    });

    assert_eq!(driver.surface().focused(), Some(&key("thanks")));
}

#[test]
fn contact_swap_without_status_is_silent() {
    let mut driver = started(site_page("/contact"));
    driver.surface_mut().set_focus(Some(key("intro")));
    driver.dispatch(&PageEvent::AfterSwap {
        target: Some(key("contact-form-container")),
    });
    assert_eq!(driver.surface().focused(), Some(&key("intro")));
    assert!(driver.surface().errors().is_empty());
}

#[test]
fn page_without_menu_never_fails() {
    let mut driver = started(bare_page("/"));
    click(&mut driver, "intro");
    click(&mut driver, "main");
    driver.dispatch(&PageEvent::Key(Key::Escape));
    driver.dispatch(&PageEvent::Scroll { offset: 500.0 });
    driver.dispatch(&PageEvent::Anchor { href: "#nowhere".to_string() });

    assert!(!driver.controller().state().menu_open());
    assert_eq!(driver.surface().focused(), None);
    assert!(driver.surface().errors().is_empty());
}

#[test]
fn stop_releases_observers_and_ignores_events() {
    let mut driver = started(site_page("/"));
    driver.stop();
    assert_eq!(driver.surface().observed().count(), 0);

    click(&mut driver, BUTTON);
    assert!(!menu_visible(&driver));
}
