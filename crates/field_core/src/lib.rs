//! # field_core
//!
//! UI-agnostic state layer for unit-aware text fields.
//!
//! This crate provides the building blocks the gallery renders:
//! - [`UnitFieldController`]: owns one field's text, unit, and focus flag
//! - [`UnitSet`] / [`InputMode`]: the unit list and the numeric/free-text policy
//! - [`FieldComposition`]: several independent fields addressed by [`FieldId`]
//! - [`TextSurface`] / [`UnitSelector`]: capabilities a UI implements to draw fields
//!
//! ## Design Principles
//!
//! The crate does not depend on any graphics framework. Renderers pull a
//! [`FieldSnapshot`] and report interactions back as [`FieldEvent`]s; all
//! mutation goes through the controller's entry points, synchronously and in
//! delivery order.

mod composition;
mod controller;
mod error;
mod event;
mod id;
mod state;
mod traits;
mod units;

pub use composition::FieldComposition;
pub use controller::{FieldConfig, UnitFieldController};
pub use error::{ConfigProblem, FieldError};
pub use event::FieldEvent;
pub use id::FieldId;
pub use state::FieldSnapshot;
pub use traits::{TextSurface, TextSurfaceProps, UnitSelector, UnitSelectorProps, render_field};
pub use units::{DEFAULT_FREEFORM, InputMode, UnitSet};
