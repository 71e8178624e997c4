//! Preference domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the settings-store key registry, the RGBA color value type and the
//! typed preference state.
//!
//! Persistence lives in `storage::{json,user_defaults}`.

pub mod color;
pub mod constants;
pub mod prefs;

pub use color::LineColor;
pub use constants::*;
pub use prefs::{CoveragePrefs, FilterStringType, LineClassification};
