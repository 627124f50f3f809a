//! Tuning values and DOM naming used by the controller.
//!
//! Every field has an in-code default matching the production site, so an
//! empty JSON object (or no config block at all) yields a working setup.

use serde::Deserialize;
use serde::Serialize;

/// Errors raised while loading a [`ControllerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid controller config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reveal threshold must be in (0, 1], got {0}")]
    RevealThreshold(f64),

    #[error("scroll offset `{name}` must be a finite non-negative number, got {value}")]
    ScrollOffset { name: &'static str, value: f64 },
}

/// Controller configuration.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Header is elevated once the scroll offset is strictly greater than this.
    pub header_elevation_offset: f64,

    /// On the home route the header CTA shows once the offset is strictly greater than this.
    pub cta_reveal_offset: f64,

    /// Visible fraction an animated element must reach before it is revealed.
    pub reveal_threshold: f64,

    /// Root margin handed to the visibility observer.
    pub reveal_root_margin: String,

    /// Path of the home route.
    pub home_path: String,

    pub ids: ElementIds,
    pub classes: ClassNames,
    pub selectors: Selectors,
}

/// Element ids the controller binds to.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub menu_button: String,
    pub menu: String,
    pub header_cta: String,
    pub contact_form_container: String,
}

/// Presentation classes toggled by the controller.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub menu_hidden: String,
    pub header_elevated: String,
    pub revealed: String,
    pub busy: String,
}

/// Selectors used to discover elements at start and after swaps.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub animated: String,
    pub anchor_links: String,
    /// Candidates for the outcome message inside the contact form container, in priority order.
    pub form_status: Vec<String>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            header_elevation_offset: 100.0,
            cta_reveal_offset: 300.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px".to_string(),
            home_path: "/".to_string(),
            ids: ElementIds::default(),
            classes: ClassNames::default(),
            selectors: Selectors::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            menu_button: "mobile-menu-btn".to_string(),
            menu: "mobile-menu".to_string(),
            header_cta: "header-cta".to_string(),
            contact_form_container: "contact-form-container".to_string(),
        }
    }
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            menu_hidden: "hidden".to_string(),
            header_elevated: "shadow-md".to_string(),
            revealed: "animate-fade-in".to_string(),
            busy: "opacity-50".to_string(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: "header".to_string(),
            animated: "[data-animate]".to_string(),
            anchor_links: "a[href^=\"#\"]".to_string(),
            form_status: vec![
                "[role=\"alert\"]".to_string(),
                ".success-message".to_string(),
                ".error-message".to_string(),
            ],
        }
    }
}

impl ControllerConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        for (name, value) in [
            ("header_elevation_offset", self.header_elevation_offset),
            ("cta_reveal_offset", self.cta_reveal_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ScrollOffset { name, value });
            }
        }
        Ok(())
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path == self.home_path
    }
}
