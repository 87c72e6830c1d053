//! Gallery configuration read from `FIELDBOOK_*` environment variables.
//!
//! | Variable                  | Meaning                                         |
//! |---------------------------|-------------------------------------------------|
//! | `FIELDBOOK_STORY`         | story shown at startup (e.g. `ExampleTextFieldError`) |
//! | `FIELDBOOK_UNITS`         | comma-separated units for the unit selector story |
//! | `FIELDBOOK_DEFAULT_UNIT`  | unit both fields start on                       |
//! | `FIELDBOOK_FREEFORM`      | unit token that switches to free text           |
//! | `FIELDBOOK_FRAME_MS`      | redraw tick interval in milliseconds            |
//!
//! Unparseable values are logged and replaced by the default.

use crate::stories::StoryId;
use field_core::DEFAULT_FREEFORM;
use std::time::Duration;

pub const CSS_UNITS: [&str; 6] = ["px", "%", "em", "rem", "vw", DEFAULT_FREEFORM];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    pub initial_story: StoryId,
    pub units: Vec<String>,
    pub default_unit: String,
    pub freeform: String,
    pub frame_interval: Duration,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            initial_story: StoryId::TextField,
            units: CSS_UNITS.iter().map(|u| u.to_string()).collect(),
            default_unit: "px".to_string(),
            freeform: DEFAULT_FREEFORM.to_string(),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl GalleryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; used directly by tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("FIELDBOOK_STORY") {
            match StoryId::from_name(&name) {
                Some(id) => config.initial_story = id,
                None => log::warn!(target: "gallery", "FIELDBOOK_STORY: unknown story {name:?}"),
            }
        }

        if let Some(raw) = lookup("FIELDBOOK_UNITS") {
            let units: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .collect();
            if units.is_empty() {
                log::warn!(target: "gallery", "FIELDBOOK_UNITS is empty; keeping defaults");
            } else {
                config.units = units;
            }
        }

        if let Some(unit) = lookup("FIELDBOOK_DEFAULT_UNIT").map(|u| u.trim().to_string())
            && !unit.is_empty()
        {
            config.default_unit = unit;
        }

        if let Some(token) = lookup("FIELDBOOK_FREEFORM").map(|t| t.trim().to_string())
            && !token.is_empty()
        {
            config.freeform = token;
        }

        if let Some(raw) = lookup("FIELDBOOK_FRAME_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.frame_interval = Duration::from_millis(ms),
                _ => log::warn!(target: "gallery", "FIELDBOOK_FRAME_MS: ignoring {raw:?}"),
            }
        }

        config
    }
}
