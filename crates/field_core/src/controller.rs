//! The unit-aware field controller.
//!
//! A controller owns one field's transient state (text, unit, focus) and is
//! the only way to mutate it. Renderers pull a [`FieldSnapshot`] after every
//! call; the controller never pushes updates.

use crate::error::{ConfigProblem, FieldError};
use crate::event::FieldEvent;
use crate::state::{FieldSnapshot, FieldState};
use crate::units::{InputMode, UnitSet};

/// Everything needed to mount one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    /// Display text for the host; the controller never reads it.
    pub label: String,
    pub units: UnitSet,
    pub initial_unit: String,
    pub initial_value: String,
}

impl FieldConfig {
    pub fn new(label: impl Into<String>, units: UnitSet, initial_unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            units,
            initial_unit: initial_unit.into(),
            initial_value: String::new(),
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }
}

/// Mediates between raw interaction events and one field's state.
///
/// # Example
///
/// ```
/// use field_core::{InputMode, UnitFieldController, UnitSet};
///
/// let units = UnitSet::new(["px", "%", "Freeform"]).unwrap();
/// let mut field = UnitFieldController::new(units, "px", "").unwrap();
///
/// field.on_value_change("42");
/// field.on_unit_change("Freeform").unwrap();
///
/// let snap = field.snapshot();
/// assert_eq!(snap.value, "42");
/// assert_eq!(snap.input_mode, InputMode::FreeText);
/// ```
#[derive(Clone, Debug)]
pub struct UnitFieldController {
    units: UnitSet,
    state: FieldState,
}

impl UnitFieldController {
    /// Fails with `InvalidConfiguration` if `initial_unit` is not in `units`.
    pub fn new(
        units: UnitSet,
        initial_unit: &str,
        initial_value: impl Into<String>,
    ) -> Result<Self, FieldError> {
        if !units.contains(initial_unit) {
            return Err(FieldError::config(ConfigProblem::UnknownInitialUnit(
                initial_unit.to_string(),
            )));
        }
        Ok(Self {
            state: FieldState {
                value: initial_value.into(),
                unit: initial_unit.to_string(),
                focused: false,
                rev: 0,
            },
            units,
        })
    }

    pub fn from_config(config: &FieldConfig) -> Result<Self, FieldError> {
        Self::new(
            config.units.clone(),
            &config.initial_unit,
            config.initial_value.clone(),
        )
    }

    /// Replace the text unconditionally. No validation or coercion happens
    /// here; character acceptance belongs to the rendering primitive.
    pub fn on_value_change(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        if self.state.value != new_text {
            self.state.value = new_text;
            self.bump();
        }
    }

    /// Switch units. The text is left exactly as it was, even when it would
    /// not be valid in the new mode.
    pub fn on_unit_change(&mut self, new_unit: &str) -> Result<(), FieldError> {
        if !self.units.contains(new_unit) {
            log::warn!(target: "field_core", "rejected unit {new_unit:?}");
            return Err(FieldError::InvalidUnit {
                unit: new_unit.to_string(),
            });
        }
        if self.state.unit != new_unit {
            log::debug!(
                target: "field_core",
                "unit {} -> {} ({:?})",
                self.state.unit,
                new_unit,
                self.units.mode_for(new_unit)
            );
            self.state.unit = new_unit.to_string();
            self.bump();
        }
        Ok(())
    }

    pub fn on_focus_gained(&mut self) {
        self.set_focused(true);
    }

    pub fn on_focus_lost(&mut self) {
        self.set_focused(false);
    }

    /// Apply one event through the matching entry point.
    pub fn apply(&mut self, event: FieldEvent) -> Result<(), FieldError> {
        log::trace!(target: "field_core", "apply {} event", event.kind());
        match event {
            FieldEvent::ValueChanged(text) => self.on_value_change(text),
            FieldEvent::UnitSelected(unit) => self.on_unit_change(&unit)?,
            FieldEvent::FocusGained => self.on_focus_gained(),
            FieldEvent::FocusLost => self.on_focus_lost(),
        }
        Ok(())
    }

    pub fn current_mode(&self) -> InputMode {
        self.units.mode_for(&self.state.unit)
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            value: self.state.value.clone(),
            unit: self.state.unit.clone(),
            focused: self.state.focused,
            input_mode: self.current_mode(),
        }
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn unit(&self) -> &str {
        &self.state.unit
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn units(&self) -> &UnitSet {
        &self.units
    }

    /// Monotonic revision counter, bumped whenever any part of the state
    /// actually changes. Useful for cache invalidation.
    pub fn revision(&self) -> u64 {
        self.state.rev
    }

    fn set_focused(&mut self, focused: bool) {
        if self.state.focused != focused {
            self.state.focused = focused;
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.state.rev = self.state.rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_units() -> UnitSet {
        UnitSet::new(["px", "%", "em", "rem", "vw", "Freeform"]).unwrap()
    }

    #[test]
    fn starts_empty_unfocused_on_initial_unit() {
        let field = UnitFieldController::new(css_units(), "em", "").unwrap();
        let snap = field.snapshot();
        assert_eq!(snap.value, "");
        assert_eq!(snap.unit, "em");
        assert!(!snap.focused);
        assert_eq!(snap.input_mode, InputMode::Numeric);
        assert_eq!(field.revision(), 0);
    }

    #[test]
    fn initial_value_is_kept_verbatim() {
        let field = UnitFieldController::new(css_units(), "px", " 12abc ").unwrap();
        assert_eq!(field.value(), " 12abc ");
    }

    #[test]
    fn rejects_initial_unit_outside_set() {
        let err = UnitFieldController::new(css_units(), "pt", "").unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidConfiguration {
                reason: ConfigProblem::UnknownInitialUnit("pt".into())
            }
        );
    }

    #[test]
    fn px_to_freeform_scenario() {
        let units = UnitSet::new(["px", "%", "Freeform"]).unwrap();
        let mut field = UnitFieldController::new(units, "px", "").unwrap();

        field.on_value_change("42");
        let snap = field.snapshot();
        assert_eq!(snap.value, "42");
        assert_eq!(snap.input_mode, InputMode::Numeric);

        field.on_unit_change("Freeform").unwrap();
        let snap = field.snapshot();
        assert_eq!(snap.value, "42");
        assert_eq!(snap.input_mode, InputMode::FreeText);

        field.on_focus_gained();
        assert!(field.snapshot().focused);
    }

    #[test]
    fn invalid_unit_leaves_state_untouched() {
        let mut field = UnitFieldController::new(css_units(), "px", "10").unwrap();
        let before = field.snapshot();
        let rev = field.revision();

        let err = field.on_unit_change("cm").unwrap_err();
        assert_eq!(err, FieldError::InvalidUnit { unit: "cm".into() });
        assert_eq!(field.snapshot(), before);
        assert_eq!(field.revision(), rev);
    }

    #[test]
    fn text_invalid_for_numeric_survives_switch_back() {
        let mut field = UnitFieldController::new(css_units(), "Freeform", "").unwrap();
        field.on_value_change("auto");
        field.on_unit_change("px").unwrap();
        assert_eq!(field.value(), "auto");
        assert_eq!(field.current_mode(), InputMode::Numeric);
    }

    #[test]
    fn clearing_value_is_allowed() {
        let mut field = UnitFieldController::new(css_units(), "px", "5").unwrap();
        field.on_value_change("");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn focus_transitions_are_idempotent() {
        let mut field = UnitFieldController::new(css_units(), "px", "").unwrap();
        field.on_focus_gained();
        field.on_focus_gained();
        assert!(field.is_focused());
        let rev = field.revision();

        field.on_focus_lost();
        field.on_focus_lost();
        assert!(!field.is_focused());
        assert_eq!(field.revision(), rev + 1);
    }

    #[test]
    fn apply_routes_events_in_order() {
        let mut field = UnitFieldController::new(css_units(), "px", "").unwrap();
        let events = [
            FieldEvent::FocusGained,
            FieldEvent::UnitSelected("Freeform".into()),
            FieldEvent::ValueChanged("fit-content".into()),
            FieldEvent::FocusLost,
        ];
        for event in events {
            field.apply(event).unwrap();
        }
        let snap = field.snapshot();
        assert_eq!(snap.value, "fit-content");
        assert_eq!(snap.unit, "Freeform");
        assert!(!snap.focused);
    }

    #[test]
    fn apply_surfaces_invalid_unit() {
        let mut field = UnitFieldController::new(css_units(), "px", "").unwrap();
        let err = field
            .apply(FieldEvent::UnitSelected("inch".into()))
            .unwrap_err();
        assert_eq!(err, FieldError::InvalidUnit { unit: "inch".into() });
        assert_eq!(field.unit(), "px");
    }

    #[test]
    fn revision_tracks_real_changes_only() {
        let mut field = UnitFieldController::new(css_units(), "px", "").unwrap();
        field.on_value_change("");
        field.on_unit_change("px").unwrap();
        assert_eq!(field.revision(), 0);

        field.on_value_change("1");
        field.on_unit_change("em").unwrap();
        assert_eq!(field.revision(), 2);
    }

    #[test]
    fn from_config_uses_initial_value() {
        let config = FieldConfig::new("Width", css_units(), "vw").with_initial_value("100");
        let field = UnitFieldController::from_config(&config).unwrap();
        assert_eq!(field.value(), "100");
        assert_eq!(field.unit(), "vw");
    }
}
