//! Per-field state and the read-only view handed to renderers.

use crate::units::InputMode;

/// Internal state for a single field.
///
/// Not exposed publicly; it is owned by exactly one
/// [`UnitFieldController`](crate::UnitFieldController).
#[derive(Clone, Debug)]
pub(crate) struct FieldState {
    /// Raw text, never coerced.
    pub value: String,

    /// Always a member of the owning controller's unit set.
    pub unit: String,

    pub focused: bool,

    /// Monotonic revision counter, incremented on any state change.
    pub rev: u64,
}

/// Owned copy of a field's state as seen by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub value: String,
    pub unit: String,
    pub focused: bool,
    pub input_mode: InputMode,
}
