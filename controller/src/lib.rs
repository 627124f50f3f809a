//! Platform-neutral core of the site's page-interaction controller.
//!
//! The decision logic lives in [`update::update`], a pure function from the
//! current [`view_model::ViewModel`] and a [`event::PageEvent`] to a new view
//! model plus a list of [`command::Command`]s. [`page_controller::PageController`]
//! wraps it with a `start()`/`stop()` lifecycle, and [`surface::apply`]
//! projects commands onto anything implementing [`surface::Surface`]: the
//! browser DOM in the `ui` crate, or [`memory_surface::MemorySurface`] in
//! tests and headless hosts.

pub mod command;
pub mod config;
pub mod driver;
pub mod element;
pub mod event;
pub mod memory_surface;
pub mod page_controller;
pub mod route;
pub mod surface;
pub mod update;
pub mod view_model;

pub use command::Command;
pub use config::ConfigError;
pub use config::ControllerConfig;
pub use driver::InteractionDriver;
pub use element::ElementKey;
pub use element::KeyAllocator;
pub use event::PageEvent;
pub use event::PageSnapshot;
pub use page_controller::PageController;
pub use surface::Surface;
pub use view_model::ViewModel;
