use crate::config::ControllerConfig;
use crate::event::PageEvent;
use crate::event::PageSnapshot;
use crate::page_controller::PageController;
use crate::surface;
use crate::surface::Applied;
use crate::surface::Surface;

/// A controller bound to the surface it renders onto.
///
/// Hosts feed events through [`dispatch`](Self::dispatch) and honor the
/// returned [`Applied`] (e.g. by calling `preventDefault`).
pub struct InteractionDriver<S: Surface> {
    controller: PageController,
    surface: S,
}

impl<S: Surface> InteractionDriver<S> {
    pub fn new(config: ControllerConfig, surface: S) -> Self {
        Self {
            controller: PageController::new(config),
            surface,
        }
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &ControllerConfig {
        self.controller.config()
    }

    pub fn start(&mut self, snapshot: &PageSnapshot) {
        let commands = self.controller.start(snapshot);
        surface::apply(&mut self.surface, &commands, self.controller.config());
    }

    pub fn dispatch(&mut self, event: &PageEvent) -> Applied {
        let commands = self.controller.handle(event);
        surface::apply(&mut self.surface, &commands, self.controller.config())
    }

    pub fn stop(&mut self) {
        let commands = self.controller.stop();
        surface::apply(&mut self.surface, &commands, self.controller.config());
    }
}
