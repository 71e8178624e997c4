//! Global access to the preference event bus.
//!
//! The bus is initialized once at application startup via
//! `init_event_bus()`; after that any module can publish through the static
//! sender. The receiver side is only touched by the main thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::PrefsEvent;

/// Global sender for publishing events. `Sender` is `Send + Sync`.
static SENDER: OnceLock<Sender<PrefsEvent>> = OnceLock::new();

/// Global receiver for draining events. Mutex satisfies `Sync`; only the
/// main thread locks it, so contention is effectively zero.
static RECEIVER: OnceLock<Mutex<Receiver<PrefsEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_event_bus() {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .expect("Event bus already initialized (sender)");

    RECEIVER
        .set(Mutex::new(receiver))
        .expect("Event bus already initialized (receiver)");
}

/// Get a publisher handle for the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publisher() -> EventPublisher {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    EventPublisher::from_sender(sender.clone())
}

/// Publish an event to the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publish(event: PrefsEvent) {
    let sender = SENDER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    // Receiver dropped means the app is shutting down; nothing to do.
    let _ = sender.send(event);
}

/// Drain all pending events from the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called, or if the receiver
/// mutex is poisoned.
pub fn drain_events() -> Vec<PrefsEvent> {
    let receiver = RECEIVER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first");

    let receiver = receiver.lock().expect("Event bus receiver mutex poisoned");

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
