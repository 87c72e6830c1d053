//! Unit sets and the input-mode policy derived from them.

use crate::error::{ConfigProblem, FieldError};

/// Unit token that switches a field into free-text entry.
pub const DEFAULT_FREEFORM: &str = "Freeform";

/// How the rendering layer should accept text for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    Numeric,
    FreeText,
}

impl InputMode {
    /// The `type` hint a text input would use for this mode.
    pub const fn input_type(self) -> &'static str {
        match self {
            InputMode::Numeric => "number",
            InputMode::FreeText => "text",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, InputMode::Numeric)
    }
}

/// Ordered, non-empty list of unit tokens plus the freeform sentinel.
///
/// The sentinel does not need to be one of the units; a set without it only
/// ever yields [`InputMode::Numeric`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSet {
    units: Vec<String>,
    freeform: String,
}

impl UnitSet {
    /// Build a unit set using [`DEFAULT_FREEFORM`] as the sentinel.
    pub fn new<I, S>(units: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_freeform(units, DEFAULT_FREEFORM)
    }

    pub fn with_freeform<I, S>(units: I, freeform: impl Into<String>) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for unit in units {
            let unit = unit.into();
            if out.contains(&unit) {
                return Err(FieldError::config(ConfigProblem::DuplicateUnit(unit)));
            }
            out.push(unit);
        }
        if out.is_empty() {
            return Err(FieldError::config(ConfigProblem::EmptyUnits));
        }
        Ok(Self {
            units: out,
            freeform: freeform.into(),
        })
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.iter().any(|u| u == unit)
    }

    /// Units in the order they were supplied.
    pub fn as_slice(&self) -> &[String] {
        &self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn freeform(&self) -> &str {
        &self.freeform
    }

    /// Mode for `unit`: free text iff it is the sentinel.
    pub fn mode_for(&self, unit: &str) -> InputMode {
        if unit == self.freeform {
            InputMode::FreeText
        } else {
            InputMode::Numeric
        }
    }
}
