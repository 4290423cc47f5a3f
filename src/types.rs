//! Core types for button registration and event reporting.

use crate::time::TimeDuration;

/// Debounce interval applied by [`ButtonConfig::new`], in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// An identifier for a GPIO line watched by a monitor.
///
/// This is a simple wrapper around `u8` that provides type safety for pin
/// numbers. The monitor never interprets the value, it only hands it back to
/// the platform and to the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        PinId(id)
    }
}

impl From<PinId> for u8 {
    fn from(id: PinId) -> Self {
        id.0
    }
}

/// A classified press-release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Held for at most the long-press threshold.
    SinglePress,

    /// Held for longer than the long-press threshold.
    LongPress,
}

/// Logic level that means "pressed" for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Button connects the pin to ground.
    Low,

    /// Button connects the pin to the supply rail.
    High,
}

impl ActiveLevel {
    /// Returns true if `level` (as read from the pin) means pressed.
    #[inline]
    pub fn is_active(self, level: bool) -> bool {
        match self {
            ActiveLevel::Low => !level,
            ActiveLevel::High => level,
        }
    }

    /// Pull resistor that keeps the pin at its idle (released) level.
    #[inline]
    pub fn idle_pull(self) -> Pull {
        match self {
            ActiveLevel::Low => Pull::Up,
            ActiveLevel::High => Pull::Down,
        }
    }
}

impl From<bool> for ActiveLevel {
    fn from(level: bool) -> Self {
        if level {
            ActiveLevel::High
        } else {
            ActiveLevel::Low
        }
    }
}

/// Input pull resistor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No internal pull, an external resistor defines the idle level.
    None,

    /// Internal pull-up enabled.
    Up,

    /// Internal pull-down enabled.
    Down,
}

/// What a debounce-rejected edge does to a press that is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BouncePolicy {
    /// The rejected edge cancels the pending press. The following release is
    /// then unpaired and reports nothing.
    #[default]
    CancelPress,

    /// The rejected edge is ignored entirely and the pending press survives.
    KeepPress,
}

/// Per-button configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonConfig<D: TimeDuration> {
    /// Level that means pressed.
    pub active_level: ActiveLevel,

    /// Presses held strictly longer than this are long presses.
    pub long_press_threshold: D,

    /// Minimum spacing between accepted transitions.
    pub debounce_interval: D,

    /// Pull resistor applied at registration.
    pub pull: Pull,

    /// Handling of rejected edges while a press is pending.
    pub bounce_policy: BouncePolicy,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Creates a configuration with the default debounce interval, the pull
    /// resistor matching `active_level` and [`BouncePolicy::CancelPress`].
    pub fn new(active_level: ActiveLevel, long_press_threshold: D) -> Self {
        Self {
            active_level,
            long_press_threshold,
            debounce_interval: D::from_millis(DEFAULT_DEBOUNCE_MS),
            pull: active_level.idle_pull(),
            bounce_policy: BouncePolicy::default(),
        }
    }

    /// Sets the debounce interval.
    pub fn with_debounce(mut self, debounce_interval: D) -> Self {
        self.debounce_interval = debounce_interval;
        self
    }

    /// Sets the pull resistor configuration.
    pub fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    /// Sets the bounce policy.
    pub fn with_bounce_policy(mut self, bounce_policy: BouncePolicy) -> Self {
        self.bounce_policy = bounce_policy;
        self
    }
}
