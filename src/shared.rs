//! Sharing a monitor between task context and an interrupt handler.
//!
//! The interrupt handler and the code that registers buttons usually live in
//! different execution contexts. [`SharedMonitor`] owns the monitor behind a
//! `critical_section::Mutex`, so every registration, removal and edge is
//! processed as one uninterruptible step and an interrupt can never see a
//! partially added or removed entry.
//!
//! ```ignore
//! static MONITOR: SharedMonitor<Monitor> = SharedMonitor::new();
//!
//! #[interrupt]
//! fn EXTI0_1() {
//!     let _ = MONITOR.on_edge(PinId(0));
//! }
//! ```

use crate::button::EdgeOutcome;
use crate::handler::ButtonHandler;
use crate::monitor::{ButtonMonitor, MonitorError};
use crate::platform::ButtonPins;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ActiveLevel, ButtonConfig, PinId};
use core::cell::RefCell;
use critical_section::Mutex;

/// A monitor slot guarded by a critical section, usable as a `static`.
///
/// Handlers run inside the critical section. They must not call back into
/// the same `SharedMonitor`; such calls fail with [`MonitorError::Busy`].
pub struct SharedMonitor<M> {
    inner: Mutex<RefCell<Option<M>>>,
}

impl<M> SharedMonitor<M> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs `monitor`, returning the one previously installed.
    pub fn install(&self, monitor: M) -> Option<M> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(monitor)))
    }

    /// Removes the installed monitor.
    ///
    /// Edges arriving afterwards fail with [`MonitorError::NotInstalled`].
    pub fn take(&self) -> Option<M> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Returns true if a monitor is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow()
                .map(|slot| slot.is_some())
                .unwrap_or(true)
        })
    }

    /// Runs `f` on the installed monitor inside a critical section.
    ///
    /// # Errors
    /// * `NotInstalled` - The slot is empty
    /// * `Busy` - Called re-entrantly from within another `with`
    pub fn with<R>(&self, f: impl FnOnce(&mut M) -> R) -> Result<R, MonitorError> {
        critical_section::with(|cs| {
            let mut slot = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| MonitorError::Busy)?;
            let monitor = slot.as_mut().ok_or(MonitorError::NotInstalled)?;
            Ok(f(monitor))
        })
    }
}

impl<M> Default for SharedMonitor<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, I, P, T, H, const N: usize> SharedMonitor<ButtonMonitor<'t, I, P, T, H, N>>
where
    I: TimeInstant,
    P: ButtonPins,
    T: TimeSource<I>,
    H: ButtonHandler,
{
    /// See [`ButtonMonitor::register`].
    pub fn register(
        &self,
        pin: PinId,
        active_level: ActiveLevel,
        long_press_threshold: I::Duration,
        handler: H,
    ) -> Result<(), MonitorError> {
        self.with(|monitor| monitor.register(pin, active_level, long_press_threshold, handler))?
    }

    /// See [`ButtonMonitor::register_with_config`].
    pub fn register_with_config(
        &self,
        pin: PinId,
        config: ButtonConfig<I::Duration>,
        handler: H,
    ) -> Result<(), MonitorError> {
        self.with(|monitor| monitor.register_with_config(pin, config, handler))?
    }

    /// See [`ButtonMonitor::deregister`].
    ///
    /// # Errors
    /// * `NotInstalled` - The slot is empty
    /// * `Busy` - Called from inside an event handler; the pin stays monitored
    pub fn deregister(&self, pin: PinId) -> Result<bool, MonitorError> {
        self.with(|monitor| monitor.deregister(pin))
    }

    /// Interrupt entry point. See [`ButtonMonitor::on_edge`].
    ///
    /// # Errors
    /// * `NotInstalled` - The slot is empty
    /// * `Busy` - Called from inside an event handler; the edge is dropped
    pub fn on_edge(&self, pin: PinId) -> Result<EdgeOutcome, MonitorError> {
        self.with(|monitor| monitor.on_edge(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{MillisInstant, Milliseconds};
    use crate::types::{ButtonEvent, Pull};

    struct NullPins;

    impl ButtonPins for NullPins {
        fn read_level(&mut self, _pin: PinId) -> bool {
            false
        }

        fn configure_pull(&mut self, _pin: PinId, _pull: Pull) {}

        fn arm_edge_interrupt(&mut self, _pin: PinId) {}

        fn disarm_edge_interrupt(&mut self, _pin: PinId) {}
    }

    struct FixedTime;

    impl TimeSource<MillisInstant> for FixedTime {
        fn now(&self) -> MillisInstant {
            MillisInstant(0)
        }
    }

    type Monitor = ButtonMonitor<'static, MillisInstant, NullPins, FixedTime, fn(PinId, ButtonEvent), 4>;

    static CLOCK: FixedTime = FixedTime;

    fn ignore(_pin: PinId, _event: ButtonEvent) {}

    #[test]
    fn empty_slot_reports_not_installed() {
        let shared = SharedMonitor::<Monitor>::new();

        assert!(!shared.is_installed());
        assert_eq!(
            shared.register(PinId(0), ActiveLevel::Low, Milliseconds(4000), ignore),
            Err(MonitorError::NotInstalled)
        );
        assert_eq!(shared.deregister(PinId(0)), Err(MonitorError::NotInstalled));
        assert_eq!(shared.on_edge(PinId(0)), Err(MonitorError::NotInstalled));
    }

    #[test]
    fn install_and_take() {
        let shared = SharedMonitor::<Monitor>::new();

        assert!(shared.install(Monitor::new(NullPins, &CLOCK)).is_none());
        assert!(shared.is_installed());

        shared
            .register(PinId(0), ActiveLevel::Low, Milliseconds(4000), ignore)
            .unwrap();
        assert_eq!(shared.with(|m| m.len()), Ok(1));

        let monitor = shared.take().unwrap();
        assert!(monitor.contains(PinId(0)));
        assert!(!shared.is_installed());
    }

    #[test]
    fn nested_use_is_busy() {
        let shared = SharedMonitor::<Monitor>::new();
        shared.install(Monitor::new(NullPins, &CLOCK));

        let nested = shared.with(|_| shared.with(|m| m.len()));

        assert_eq!(nested, Ok(Err(MonitorError::Busy)));
    }
}
