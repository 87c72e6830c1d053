//! # gallery
//!
//! Browsable stories for the text field and the unit-aware field, drawn with
//! egui. Field state lives in [`field_core`]; this crate only owns story
//! selection, the documented argument table, and the egui renderings of the
//! field capabilities.

mod app;
pub mod args;
mod config;
pub mod stories;
pub mod widgets;

pub use app::GalleryApp;
pub use config::{CSS_UNITS, GalleryConfig};
pub use stories::{Story, StoryId};
