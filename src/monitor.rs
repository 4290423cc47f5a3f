//! Button registry and interrupt entry point.

use crate::button::{EdgeOutcome, MonitoredButton};
use crate::handler::ButtonHandler;
use crate::platform::ButtonPins;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ActiveLevel, ButtonConfig, PinId};
use heapless::Vec;

/// Errors that can occur during monitor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// The pin is already registered. Deregister it first.
    AlreadyMonitored(PinId),

    /// The monitor is full and cannot accept more buttons.
    RegistryFull { capacity: usize },

    /// A [`SharedMonitor`](crate::SharedMonitor) was used before a monitor
    /// was installed in it.
    NotInstalled,

    /// A [`SharedMonitor`](crate::SharedMonitor) was re-entered while already
    /// in use, typically from inside an event handler.
    Busy,
}

impl core::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MonitorError::AlreadyMonitored(pin) => {
                write!(f, "pin {} is already monitored", pin.0)
            }
            MonitorError::RegistryFull { capacity } => {
                write!(f, "monitor is full, capacity is {} buttons", capacity)
            }
            MonitorError::NotInstalled => {
                write!(f, "no monitor installed")
            }
            MonitorError::Busy => {
                write!(f, "monitor is already in use")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MonitorError {}

/// Watches a set of GPIO pins and turns their edges into button events.
///
/// Each pin is registered with its own configuration and handler. The
/// platform's edge interrupt handler calls [`on_edge`](Self::on_edge) for every
/// transition; the monitor filters contact bounce, pairs presses with
/// releases and calls the handler with a [`ButtonEvent`](crate::ButtonEvent)
/// when a button is let go.
///
/// A long press is reported on release, not when the threshold is crossed.
///
/// All buttons share one handler type. Use `fn(PinId, ButtonEvent)` to mix
/// different functions, or a single closure that dispatches on the pin.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin hardware implementation type
/// * `T` - Time source implementation type
/// * `H` - Event handler type
/// * `N` - Maximum number of monitored buttons
pub struct ButtonMonitor<'t, I, P, T, H, const N: usize>
where
    I: TimeInstant,
    P: ButtonPins,
    T: TimeSource<I>,
    H: ButtonHandler,
{
    pins: P,
    time_source: &'t T,
    buttons: Vec<MonitoredButton<I, H>, N>,
}

impl<'t, I, P, T, H, const N: usize> ButtonMonitor<'t, I, P, T, H, N>
where
    I: TimeInstant,
    P: ButtonPins,
    T: TimeSource<I>,
    H: ButtonHandler,
{
    /// Creates a monitor with no registered buttons.
    ///
    /// # Arguments
    /// * `pins` - The pin hardware implementation
    /// * `time_source` - Reference to the millisecond clock
    pub fn new(pins: P, time_source: &'t T) -> Self {
        Self {
            pins,
            time_source,
            buttons: Vec::new(),
        }
    }

    /// Starts monitoring `pin` with the default debounce interval.
    ///
    /// # Arguments
    /// * `pin` - The GPIO line to watch
    /// * `active_level` - The level read while the button is held down
    /// * `long_press_threshold` - Presses held longer than this are long presses
    /// * `handler` - Receives the events for this pin
    ///
    /// # Errors
    /// * `AlreadyMonitored` - The pin is registered; nothing was changed
    /// * `RegistryFull` - All `N` slots are in use
    pub fn register(
        &mut self,
        pin: PinId,
        active_level: ActiveLevel,
        long_press_threshold: I::Duration,
        handler: H,
    ) -> Result<(), MonitorError> {
        self.register_with_config(pin, ButtonConfig::new(active_level, long_press_threshold), handler)
    }

    /// Starts monitoring `pin` with an explicit configuration.
    ///
    /// The entry is stored and the pull resistor configured before the edge
    /// interrupt is armed, so the first interrupt always finds a complete
    /// entry. A rejected registration leaves the hardware untouched.
    ///
    /// # Errors
    /// * `AlreadyMonitored` - The pin is registered; nothing was changed
    /// * `RegistryFull` - All `N` slots are in use
    pub fn register_with_config(
        &mut self,
        pin: PinId,
        config: ButtonConfig<I::Duration>,
        handler: H,
    ) -> Result<(), MonitorError> {
        if self.contains(pin) {
            return Err(MonitorError::AlreadyMonitored(pin));
        }

        let button = MonitoredButton::new(pin, config, handler, self.time_source.now());
        self.buttons
            .push(button)
            .map_err(|_| MonitorError::RegistryFull { capacity: N })?;
        self.pins.configure_pull(pin, config.pull);
        self.pins.arm_edge_interrupt(pin);

        debug!("pin {}: monitoring, active {}", pin, config.active_level);
        Ok(())
    }

    /// Stops monitoring `pin`.
    ///
    /// The interrupt is disarmed before the entry is removed. The handler is
    /// not called. Returns false if the pin was not monitored, in which case
    /// the hardware is left untouched.
    pub fn deregister(&mut self, pin: PinId) -> bool {
        let Some(index) = self.position(pin) else {
            return false;
        };

        self.pins.disarm_edge_interrupt(pin);
        self.buttons.swap_remove(index);

        debug!("pin {}: no longer monitored", pin);
        true
    }

    /// Interrupt entry point. Call this for every edge on a monitored pin.
    ///
    /// Edges for pins that are not registered are ignored. When the edge
    /// completes a press the pin's handler runs before this returns.
    pub fn on_edge(&mut self, pin: PinId) -> EdgeOutcome {
        let Some(button) = self.buttons.iter_mut().find(|b| b.pin() == pin) else {
            trace!("pin {}: edge on unmonitored pin", pin);
            return EdgeOutcome::Unmonitored;
        };

        let now = self.time_source.now();
        let pins = &mut self.pins;
        button.handle_edge(now, || pins.read_level(pin))
    }

    /// Disarms every monitored pin and returns the pin hardware.
    pub fn release(mut self) -> P {
        for button in &self.buttons {
            self.pins.disarm_edge_interrupt(button.pin());
        }
        self.pins
    }

    /// Returns the registry entry for `pin`.
    pub fn button(&self, pin: PinId) -> Option<&MonitoredButton<I, H>> {
        self.buttons.iter().find(|b| b.pin() == pin)
    }

    /// Returns the configuration `pin` was registered with.
    pub fn config(&self, pin: PinId) -> Option<ButtonConfig<I::Duration>> {
        self.button(pin).map(|b| *b.config())
    }

    /// Returns true if `pin` has a press waiting for its release.
    pub fn is_press_pending(&self, pin: PinId) -> bool {
        self.button(pin).is_some_and(MonitoredButton::is_press_pending)
    }

    /// Iterates over the monitored pins in no particular order.
    pub fn pins(&self) -> impl Iterator<Item = PinId> + '_ {
        self.buttons.iter().map(MonitoredButton::pin)
    }

    /// Returns a reference to the pin hardware.
    pub fn platform(&self) -> &P {
        &self.pins
    }

    /// Returns a mutable reference to the pin hardware.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Returns the number of monitored buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Returns true if no buttons are monitored.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Returns the maximum number of buttons.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns true if `pin` is monitored.
    pub fn contains(&self, pin: PinId) -> bool {
        self.position(pin).is_some()
    }

    fn position(&self, pin: PinId) -> Option<usize> {
        self.buttons.iter().position(|b| b.pin() == pin)
    }
}
