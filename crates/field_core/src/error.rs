//! Contract errors raised by controllers and compositions.
//!
//! Every variant is a programmer error: the caller handed over data outside
//! the declared contract. They are returned immediately and never retried.

use crate::id::FieldId;
use std::fmt;

/// What was wrong with a field configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigProblem {
    /// The unit list was empty.
    EmptyUnits,
    /// The same unit token appeared more than once.
    DuplicateUnit(String),
    /// The initial unit is not part of the unit list.
    UnknownInitialUnit(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    InvalidConfiguration { reason: ConfigProblem },
    InvalidUnit { unit: String },
    UnknownField { id: FieldId },
}

impl FieldError {
    pub(crate) fn config(reason: ConfigProblem) -> Self {
        FieldError::InvalidConfiguration { reason }
    }
}

impl fmt::Display for ConfigProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigProblem::EmptyUnits => write!(f, "unit list is empty"),
            ConfigProblem::DuplicateUnit(unit) => write!(f, "unit {unit:?} listed twice"),
            ConfigProblem::UnknownInitialUnit(unit) => {
                write!(f, "initial unit {unit:?} is not in the unit list")
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidConfiguration { reason } => {
                write!(f, "invalid field configuration: {reason}")
            }
            FieldError::InvalidUnit { unit } => write!(f, "invalid unit: {unit:?}"),
            FieldError::UnknownField { id } => write!(f, "no mounted field for {id}"),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        let err = FieldError::config(ConfigProblem::UnknownInitialUnit("pt".into()));
        assert_eq!(
            err.to_string(),
            "invalid field configuration: initial unit \"pt\" is not in the unit list"
        );

        let err = FieldError::InvalidUnit { unit: "cm".into() };
        assert_eq!(err.to_string(), "invalid unit: \"cm\"");
    }
}
