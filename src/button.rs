//! Per-pin debounce and press classification.
//!
//! Provides [`MonitoredButton`], the registry entry for one watched pin. A
//! button is either idle or has a press pending since some instant; the only
//! transitions are the ones driven by accepted edges in
//! [`MonitoredButton::handle_edge`].

use crate::handler::ButtonHandler;
use crate::time::{TimeDuration, TimeInstant};
use crate::types::{BouncePolicy, ButtonConfig, ButtonEvent, PinId};

/// What an edge interrupt did to the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// No button is registered for the pin.
    Unmonitored,

    /// The edge arrived inside the debounce interval and was discarded.
    Bounced,

    /// Accepted edge at the active level. A press is now pending.
    Pressed,

    /// Accepted edge at the idle level. Carries the event passed to the
    /// handler, or `None` when there was no pending press to close.
    Released(Option<ButtonEvent>),
}

/// Registry entry for one watched pin.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `H` - Event handler type
pub struct MonitoredButton<I: TimeInstant, H: ButtonHandler> {
    pin: PinId,
    handler: H,
    config: ButtonConfig<I::Duration>,
    press_started_at: Option<I>,
    last_transition_at: I,
}

impl<I: TimeInstant, H: ButtonHandler> MonitoredButton<I, H> {
    /// Creates an idle button whose debounce window starts at `now`.
    pub(crate) fn new(pin: PinId, config: ButtonConfig<I::Duration>, handler: H, now: I) -> Self {
        Self {
            pin,
            handler,
            config,
            press_started_at: None,
            last_transition_at: now,
        }
    }

    /// Returns the pin this entry watches.
    #[inline]
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Returns the configuration given at registration.
    #[inline]
    pub fn config(&self) -> &ButtonConfig<I::Duration> {
        &self.config
    }

    /// Returns the instant the pending press started, if any.
    #[inline]
    pub fn press_started_at(&self) -> Option<I> {
        self.press_started_at
    }

    /// Returns the instant of the most recent accepted transition.
    #[inline]
    pub fn last_transition_at(&self) -> I {
        self.last_transition_at
    }

    /// Returns true while a press is waiting for its release.
    #[inline]
    pub fn is_press_pending(&self) -> bool {
        self.press_started_at.is_some()
    }

    /// Processes one edge observed at `now`.
    ///
    /// `read_level` is only called once the edge has passed the debounce
    /// filter. A classified release is delivered to the handler before this
    /// returns.
    pub(crate) fn handle_edge(&mut self, now: I, read_level: impl FnOnce() -> bool) -> EdgeOutcome {
        let since_last = now.duration_since(self.last_transition_at);
        if since_last.as_millis() < self.config.debounce_interval.as_millis() {
            // last_transition_at stays put, otherwise sustained bounce would
            // keep the window open forever
            if self.config.bounce_policy == BouncePolicy::CancelPress {
                self.press_started_at = None;
            }
            trace!("pin {}: edge rejected after {} ms", self.pin, since_last.as_millis());
            return EdgeOutcome::Bounced;
        }

        self.last_transition_at = now;

        if self.config.active_level.is_active(read_level()) {
            self.press_started_at = Some(now);
            trace!("pin {}: pressed", self.pin);
            return EdgeOutcome::Pressed;
        }

        let Some(started_at) = self.press_started_at.take() else {
            trace!("pin {}: release without pending press", self.pin);
            return EdgeOutcome::Released(None);
        };

        let held = now.duration_since(started_at);
        let event = if held.as_millis() > self.config.long_press_threshold.as_millis() {
            ButtonEvent::LongPress
        } else {
            ButtonEvent::SinglePress
        };

        debug!("pin {}: {} after {} ms", self.pin, event, held.as_millis());
        self.handler.on_event(self.pin, event);
        EdgeOutcome::Released(Some(event))
    }
}
