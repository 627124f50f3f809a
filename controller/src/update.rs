//! The controller's decision logic.
//!
//! Everything here is a pure function of its inputs: no page access, no
//! logging, no interior state. Side effects are expressed as [`Command`]s.

use crate::command::Command;
use crate::config::ControllerConfig;
use crate::element::ElementKey;
use crate::event::Key;
use crate::event::PageEvent;
use crate::event::PageSnapshot;
use crate::event::PointerRegion;
use crate::view_model::Bindings;
use crate::view_model::MenuState;
use crate::view_model::ViewModel;

/// Result of feeding one input to the reducer.
#[derive(Clone, PartialEq, Debug)]
pub struct Transition {
    pub state: ViewModel,
    pub commands: Vec<Command>,
}

impl Transition {
    fn unchanged(state: &ViewModel) -> Self {
        Self {
            state: state.clone(),
            commands: Vec::new(),
        }
    }
}

/// Builds the initial state for a freshly loaded page.
pub fn start(snapshot: &PageSnapshot, config: &ControllerConfig) -> Transition {
    let mut commands = Vec::new();

    if let Some(menu) = &snapshot.menu {
        commands.push(Command::SyncMenu {
            button: menu.button.clone(),
            menu: menu.menu.clone(),
            open: false,
        });
    }

    let header_elevated = snapshot.scroll_offset > config.header_elevation_offset;
    if let Some(header) = &snapshot.header {
        commands.push(Command::SetHeaderElevated {
            header: header.clone(),
            elevated: header_elevated,
        });
    }

    // The CTA starts hidden on the home route whatever the current offset is.
    let cta = snapshot
        .cta
        .clone()
        .filter(|_| config.is_home_path(&snapshot.path));
    let cta_visible = cta.as_ref().map(|cta| {
        commands.push(Command::SetCtaVisible {
            cta: cta.clone(),
            visible: false,
        });
        false
    });

    let mut state = ViewModel {
        bindings: Bindings {
            menu: snapshot.menu.clone(),
            header: snapshot.header.clone(),
            cta,
            contact_form_container: ElementKey::new(config.ids.contact_form_container.clone()),
        },
        menu: MenuState::Closed,
        header_elevated,
        cta_visible,
        ..Default::default()
    };

    for element in &snapshot.animated {
        if state.pending_reveal.insert(element.clone()) {
            commands.push(Command::Observe(element.clone()));
        }
    }

    Transition { state, commands }
}

/// Commands that release everything a running controller holds on the page.
pub fn stop(state: &ViewModel) -> Vec<Command> {
    state
        .pending_reveal
        .iter()
        .cloned()
        .map(Command::Unobserve)
        .collect()
}

/// Applies one event to `state`.
pub fn update(state: &ViewModel, event: &PageEvent, config: &ControllerConfig) -> Transition {
    match event {
        PageEvent::Pointer(region) => pointer(state, *region),
        PageEvent::Key(key) => key_press(state, key),
        PageEvent::Scroll { offset } => scroll(state, *offset, config),
        PageEvent::Anchor { href } => anchor(state, href),
        PageEvent::Visibility { element, visible } => visibility(state, element, *visible),
        PageEvent::UpdateBegin { target } => match target {
            Some(target) => set_busy(state, target, true),
            None => Transition::unchanged(state),
        },
        PageEvent::UpdateEnd { target } => match target {
            Some(target) => set_busy(state, target, false),
            None => Transition::unchanged(state),
        },
        PageEvent::UpdateError { target, error } => {
            let mut next = match target {
                Some(target) => set_busy(state, target, false),
                None => Transition::unchanged(state),
            };
            next.commands
                .insert(0, Command::ReportError(format!("partial update failed: {error}")));
            next
        }
        PageEvent::AfterSwap { target } => match target {
            Some(target) if *target == state.bindings.contact_form_container => Transition {
                state: state.clone(),
                commands: vec![Command::FocusFormStatus {
                    container: target.clone(),
                }],
            },
            _ => Transition::unchanged(state),
        },
    }
}

fn set_menu(state: &ViewModel, menu: MenuState) -> Transition {
    let Some(binding) = &state.bindings.menu else {
        return Transition::unchanged(state);
    };
    let mut next = state.clone();
    next.menu = menu;
    Transition {
        state: next,
        commands: vec![Command::SyncMenu {
            button: binding.button.clone(),
            menu: binding.menu.clone(),
            open: menu.is_open(),
        }],
    }
}

fn pointer(state: &ViewModel, region: PointerRegion) -> Transition {
    if state.bindings.menu.is_none() {
        return Transition::unchanged(state);
    }
    match region {
        PointerRegion::ToggleButton => set_menu(state, state.menu.toggled()),
        PointerRegion::MenuLink | PointerRegion::Outside if state.menu.is_open() => {
            set_menu(state, MenuState::Closed)
        }
        _ => Transition::unchanged(state),
    }
}

fn key_press(state: &ViewModel, key: &Key) -> Transition {
    match (key, &state.bindings.menu) {
        (Key::Escape, Some(binding)) if state.menu.is_open() => {
            let mut next = set_menu(state, MenuState::Closed);
            next.commands.push(Command::Focus(binding.button.clone()));
            next
        }
        _ => Transition::unchanged(state),
    }
}

fn scroll(state: &ViewModel, offset: f64, config: &ControllerConfig) -> Transition {
    let mut next = state.clone();
    let mut commands = Vec::new();

    let elevated = offset > config.header_elevation_offset;
    if elevated != state.header_elevated {
        next.header_elevated = elevated;
        if let Some(header) = &state.bindings.header {
            commands.push(Command::SetHeaderElevated {
                header: header.clone(),
                elevated,
            });
        }
    }

    if let (Some(cta), Some(was_visible)) = (&state.bindings.cta, state.cta_visible) {
        let visible = offset > config.cta_reveal_offset;
        if visible != was_visible {
            next.cta_visible = Some(visible);
            commands.push(Command::SetCtaVisible {
                cta: cta.clone(),
                visible,
            });
        }
    }

    Transition {
        state: next,
        commands,
    }
}

fn anchor(state: &ViewModel, href: &str) -> Transition {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Transition {
            state: state.clone(),
            commands: vec![
                Command::PreventDefault,
                Command::ScrollToAndFocus { id: id.to_string() },
            ],
        },
        _ => Transition::unchanged(state),
    }
}

fn visibility(state: &ViewModel, element: &ElementKey, visible: bool) -> Transition {
    if !visible || !state.pending_reveal.contains(element) {
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    next.pending_reveal.remove(element);
    next.revealed.insert(element.clone());
    Transition {
        state: next,
        commands: vec![
            Command::Reveal(element.clone()),
            Command::Unobserve(element.clone()),
        ],
    }
}

fn set_busy(state: &ViewModel, target: &ElementKey, busy: bool) -> Transition {
    let mut next = state.clone();
    if busy {
        next.busy.insert(target.clone());
    } else {
        next.busy.remove(target);
    }
    Transition {
        state: next,
        commands: vec![Command::SetBusy {
            target: target.clone(),
            busy,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MenuBinding;
    use pretty_assertions::assert_eq;

    fn home_snapshot() -> PageSnapshot {
        PageSnapshot {
            path: "/".to_string(),
            scroll_offset: 0.0,
            menu: Some(MenuBinding {
                button: "mobile-menu-btn".into(),
                menu: "mobile-menu".into(),
            }),
            header: Some("pc-1".into()),
            cta: Some("header-cta".into()),
            animated: vec!["hero".into(), "stats".into()],
        }
    }

    fn started(snapshot: &PageSnapshot) -> ViewModel {
        start(snapshot, &ControllerConfig::default()).state
    }

    fn step(state: &ViewModel, event: PageEvent) -> Transition {
        update(state, &event, &ControllerConfig::default())
    }

    #[test]
    fn start_syncs_menu_header_cta_and_observes() {
        let transition = start(&home_snapshot(), &ControllerConfig::default());
        assert_eq!(
            transition.commands,
            vec![
                Command::SyncMenu {
                    button: "mobile-menu-btn".into(),
                    menu: "mobile-menu".into(),
                    open: false,
                },
                Command::SetHeaderElevated {
                    header: "pc-1".into(),
                    elevated: false,
                },
                Command::SetCtaVisible {
                    cta: "header-cta".into(),
                    visible: false,
                },
                Command::Observe("hero".into()),
                Command::Observe("stats".into()),
            ]
        );
        assert_eq!(transition.state.cta_visible, Some(false));
    }

    #[test]
    fn cta_hidden_at_start_even_when_scrolled() {
        let mut snapshot = home_snapshot();
        snapshot.scroll_offset = 900.0;
        let state = started(&snapshot);
        assert_eq!(state.cta_visible, Some(false));
        assert!(state.header_elevated);
    }

    #[test]
    fn cta_unmanaged_off_home() {
        let mut snapshot = home_snapshot();
        snapshot.path = "/pricing".to_string();
        let state = started(&snapshot);
        assert_eq!(state.bindings.cta, None);
        let next = step(&state, PageEvent::Scroll { offset: 500.0 });
        assert!(!next
            .commands
            .iter()
            .any(|cmd| matches!(cmd, Command::SetCtaVisible { .. })));
    }

    #[test]
    fn toggle_then_escape_focuses_button() {
        let state = started(&home_snapshot());
        let open = step(&state, PageEvent::Pointer(PointerRegion::ToggleButton)).state;
        assert!(open.menu_open());

        let closed = step(&open, PageEvent::Key(Key::Escape));
        assert!(!closed.state.menu_open());
        assert_eq!(
            closed.commands.last(),
            Some(&Command::Focus("mobile-menu-btn".into()))
        );
    }

    #[test]
    fn click_inside_menu_keeps_it_open() {
        let state = started(&home_snapshot());
        let open = step(&state, PageEvent::Pointer(PointerRegion::ToggleButton)).state;
        let next = step(&open, PageEvent::Pointer(PointerRegion::Menu));
        assert!(next.state.menu_open());
        assert!(next.commands.is_empty());
    }

    #[test]
    fn menu_events_ignored_without_menu() {
        let mut snapshot = home_snapshot();
        snapshot.menu = None;
        let state = started(&snapshot);
        for event in [
            PageEvent::Pointer(PointerRegion::ToggleButton),
            PageEvent::Pointer(PointerRegion::Outside),
            PageEvent::Key(Key::Escape),
        ] {
            let next = step(&state, event);
            assert!(next.commands.is_empty());
            assert!(!next.state.menu_open());
        }
    }

    #[test]
    fn bare_hash_is_ignored() {
        let state = started(&home_snapshot());
        assert!(step(&state, PageEvent::Anchor { href: "#".into() }).commands.is_empty());
        assert!(step(&state, PageEvent::Anchor { href: "/about".into() }).commands.is_empty());
    }

    #[test]
    fn anchor_prevents_default_and_scrolls() {
        let state = started(&home_snapshot());
        let next = step(&state, PageEvent::Anchor { href: "#section-2".into() });
        assert_eq!(
            next.commands,
            vec![
                Command::PreventDefault,
                Command::ScrollToAndFocus { id: "section-2".into() },
            ]
        );
    }

    #[test]
    fn error_reports_then_clears_busy() {
        let state = started(&home_snapshot());
        let busy = step(&state, PageEvent::UpdateBegin { target: Some("list".into()) }).state;
        assert!(busy.is_busy(&"list".into()));

        let next = step(
            &busy,
            PageEvent::UpdateError {
                target: Some("list".into()),
                error: "502".into(),
            },
        );
        assert!(!next.state.is_busy(&"list".into()));
        assert_eq!(
            next.commands,
            vec![
                Command::ReportError("partial update failed: 502".into()),
                Command::SetBusy {
                    target: "list".into(),
                    busy: false,
                },
            ]
        );
    }

    #[test]
    fn after_swap_only_for_contact_container() {
        let state = started(&home_snapshot());
        let other = step(&state, PageEvent::AfterSwap { target: Some("news".into()) });
        assert!(other.commands.is_empty());

        let contact = step(
            &state,
            PageEvent::AfterSwap {
                target: Some("contact-form-container".into()),
            },
        );
        assert_eq!(
            contact.commands,
            vec![Command::FocusFormStatus {
                container: "contact-form-container".into(),
            }]
        );
    }

    #[test]
    fn duplicate_animated_elements_observed_once() {
        let mut snapshot = home_snapshot();
        snapshot.animated = vec!["hero".into(), "hero".into()];
        let transition = start(&snapshot, &ControllerConfig::default());
        let observes = transition
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, Command::Observe(_)))
            .count();
        assert_eq!(observes, 1);
    }

    #[test]
    fn stop_unobserves_pending() {
        let state = started(&home_snapshot());
        let state = step(
            &state,
            PageEvent::Visibility {
                element: "hero".into(),
                visible: true,
            },
        )
        .state;
        assert_eq!(stop(&state), vec![Command::Unobserve("stats".into())]);
    }
}
