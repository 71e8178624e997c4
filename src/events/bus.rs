//! Thread-safe event bus using mpsc channels.
//!
//! Any thread can publish via `EventPublisher::publish()`; the main thread
//! polls with `EventBus::drain()`.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::PrefsEvent;

/// Multi-producer, single-consumer event bus.
///
/// Settings UI and the storage layer hold cloned publishers; the main
/// thread owns the bus and drains it each cycle.
pub struct EventBus {
    sender: Sender<PrefsEvent>,
    receiver: Receiver<PrefsEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Receives the next event without blocking, if one is pending.
    pub fn try_recv(&self) -> Option<PrefsEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // Disconnected only happens during shutdown; treat as empty.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drains all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<PrefsEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<PrefsEvent>,
}

impl EventPublisher {
    /// Wraps an existing sender. Used by the global access module.
    pub fn from_sender(sender: Sender<PrefsEvent>) -> Self {
        Self { sender }
    }

    /// Publishes an event to the bus.
    ///
    /// Send errors are ignored: the receiver only drops at shutdown.
    pub fn publish(&self, event: PrefsEvent) {
        let _ = self.sender.send(event);
    }
}
