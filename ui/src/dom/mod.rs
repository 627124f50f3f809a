//! Browser adapter for the page controller, built on `web-sys`.
//!
//! [`surface::DomSurface`] implements [`controller::Surface`] against the
//! live document; [`binding::DomBinding`] owns the listeners that turn DOM
//! events into [`controller::PageEvent`]s.

pub mod binding;
pub mod error;
pub mod surface;
