//! Preference layer for the CoverStory code-coverage viewer.
//!
//! This crate owns the user-preference surface of the application: the
//! settings-store key registry, the typed preference model with defaults and
//! validation, filter-string interpretation (wildcard vs regex), persistence
//! backends, and a change-notification bus. Everything except the macOS
//! NSUserDefaults backend is pure Rust so tests can run as normal
//! integration tests.

pub mod error;
pub mod events;
pub mod filter;
pub mod model;
pub mod storage;

// Re-export model types for convenience
pub use model::{CoveragePrefs, FilterStringType, LineClassification, LineColor};

// Re-export event types for convenience
pub use events::{EventBus, EventPublisher, PrefsEvent};

pub use error::{FilterError, PrefsError};
pub use filter::SourceFilter;

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
