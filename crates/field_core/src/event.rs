//! Events delivered by rendering primitives to a controller.

/// One user interaction, in the order the host delivered it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    /// The raw text was edited; carries the full new text.
    ValueChanged(String),
    /// A unit was picked from the selector.
    UnitSelected(String),
    FocusGained,
    FocusLost,
}

impl FieldEvent {
    /// Short name used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldEvent::ValueChanged(_) => "value",
            FieldEvent::UnitSelected(_) => "unit",
            FieldEvent::FocusGained => "focus",
            FieldEvent::FocusLost => "blur",
        }
    }
}
