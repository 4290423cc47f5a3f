//! Shared test infrastructure for button-monitor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_monitor::{
    ButtonEvent, ButtonMonitor, ButtonPins, MillisInstant, PinId, Pull, TimeSource,
};
use core::cell::{Cell, RefCell};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<MillisInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: Cell::new(MillisInstant(millis)),
        }
    }

    /// Advance time by the given number of milliseconds (wrapping)
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(MillisInstant(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(MillisInstant(millis));
    }
}

impl TimeSource<MillisInstant> for MockTimeSource {
    fn now(&self) -> MillisInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// A hardware call made by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCall {
    Pull(PinId, Pull),
    Arm(PinId),
    Disarm(PinId),
}

/// Mock GPIO bank with settable levels that records every configuration call.
///
/// All lines idle high, matching pulled-up, active-low buttons.
pub struct MockPins {
    levels: [bool; 8],
    calls: heapless::Vec<PinCall, 32>,
}

impl MockPins {
    pub fn new() -> Self {
        Self {
            levels: [true; 8],
            calls: heapless::Vec::new(),
        }
    }

    pub fn set_level(&mut self, pin: PinId, level: bool) {
        self.levels[pin.0 as usize] = level;
    }

    pub fn calls(&self) -> &[PinCall] {
        &self.calls
    }

    pub fn is_armed(&self, pin: PinId) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                PinCall::Arm(p) if *p == pin => Some(true),
                PinCall::Disarm(p) if *p == pin => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl ButtonPins for MockPins {
    fn read_level(&mut self, pin: PinId) -> bool {
        self.levels[pin.0 as usize]
    }

    fn configure_pull(&mut self, pin: PinId, pull: Pull) {
        self.calls.push(PinCall::Pull(pin, pull)).unwrap();
    }

    fn arm_edge_interrupt(&mut self, pin: PinId) {
        self.calls.push(PinCall::Arm(pin)).unwrap();
    }

    fn disarm_edge_interrupt(&mut self, pin: PinId) {
        self.calls.push(PinCall::Disarm(pin)).unwrap();
    }
}

// ============================================================================
// Event Recording
// ============================================================================

/// Collects the events delivered to handlers
pub struct EventLog {
    events: RefCell<heapless::Vec<(PinId, ButtonEvent), 32>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn record(&self, pin: PinId, event: ButtonEvent) {
        self.events.borrow_mut().push((pin, event)).unwrap();
    }

    pub fn events(&self) -> heapless::Vec<(PinId, ButtonEvent), 32> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}

/// Handler type used by tests that record into an `EventLog`
pub type Recorder<'a> = &'a dyn Fn(PinId, ButtonEvent);

pub type TestMonitor<'t, 'a> =
    ButtonMonitor<'t, MillisInstant, MockPins, MockTimeSource, Recorder<'a>, 4>;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Drive `pin` to `level` at the current mock time and deliver the edge
pub fn edge(monitor: &mut TestMonitor<'_, '_>, pin: PinId, level: bool) -> button_monitor::EdgeOutcome {
    monitor.platform_mut().set_level(pin, level);
    monitor.on_edge(pin)
}
