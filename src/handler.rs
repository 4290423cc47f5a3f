//! Application callback contract.

use crate::types::{ButtonEvent, PinId};

/// Receives classified button events.
///
/// Called synchronously from the monitor's interrupt entry point, so
/// implementations must not block. Defer heavy work to task context (for
/// example by setting a flag or signalling a channel).
///
/// Implemented for every `FnMut(PinId, ButtonEvent)`, so plain `fn` items and
/// closures can be registered directly.
pub trait ButtonHandler {
    /// Handles one event for `pin`.
    fn on_event(&mut self, pin: PinId, event: ButtonEvent);
}

impl<F> ButtonHandler for F
where
    F: FnMut(PinId, ButtonEvent),
{
    #[inline]
    fn on_event(&mut self, pin: PinId, event: ButtonEvent) {
        self(pin, event)
    }
}
