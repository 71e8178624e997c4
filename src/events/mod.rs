//! Preference change notifications.
//!
//! A simple publish/subscribe mechanism over std `mpsc` channels. Settings
//! UI publishes a [`PrefsEvent`] whenever it writes a preference; views
//! drain the bus and refilter or redraw as needed. Event types are pure
//! Rust enums, so everything here is testable without a UI.
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`PrefsEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

// Re-export main types for convenient access
pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::PrefsEvent;
