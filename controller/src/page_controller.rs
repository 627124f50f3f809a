//! Lifecycle wrapper around the reducer.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::command::Command;
use crate::config::ControllerConfig;
use crate::event::PageEvent;
use crate::event::PageSnapshot;
use crate::update;
use crate::view_model::ViewModel;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Owns the view model for one page and gates events on the lifecycle.
///
/// Events are only processed between [`start`](Self::start) and
/// [`stop`](Self::stop). A stopped controller may be started again, e.g.
/// after a client-side navigation, and begins from fresh state.
#[derive(Debug)]
pub struct PageController {
    config: ControllerConfig,
    state: ViewModel,
    phase: Phase,
}

impl PageController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            state: ViewModel::default(),
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewModel {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Binds to a page. Calling this while running restarts from `snapshot`.
    pub fn start(&mut self, snapshot: &PageSnapshot) -> Vec<Command> {
        let mut commands = if self.phase.is_running() {
            self.stop()
        } else {
            Vec::new()
        };

        let transition = update::start(snapshot, &self.config);
        info!(
            "page controller started on {} (menu: {}, animated: {})",
            snapshot.path,
            snapshot.menu.is_some(),
            transition.state.pending_reveal.len()
        );
        self.state = transition.state;
        self.phase = Phase::Running;
        commands.extend(transition.commands);
        commands
    }

    pub fn handle(&mut self, event: &PageEvent) -> Vec<Command> {
        if !self.phase.is_running() {
            debug!("ignoring {:?} while {:?}", event, self.phase);
            return Vec::new();
        }
        let transition = update::update(&self.state, event, &self.config);
        self.state = transition.state;
        transition.commands
    }

    /// Releases the page. Returns the commands that undo observation.
    pub fn stop(&mut self) -> Vec<Command> {
        if !self.phase.is_running() {
            return Vec::new();
        }
        let commands = update::stop(&self.state);
        self.state = ViewModel::default();
        self.phase = Phase::Stopped;
        info!("page controller stopped");
        commands
    }
}
