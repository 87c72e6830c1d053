//! Identifier for fields mounted in a [`FieldComposition`](crate::FieldComposition).
//!
//! Ids are handed out by the composition in mount order and are never reused
//! within one composition, so a stale id cannot address a newer field.

/// Opaque handle addressing one mounted field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    /// Create a `FieldId` from a raw value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[inline]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}
