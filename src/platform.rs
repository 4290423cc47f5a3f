//! Hardware abstraction for the pins a monitor watches.

use crate::types::{PinId, Pull};

/// Trait for abstracting GPIO input hardware.
///
/// Implement this for your HAL to let a [`ButtonMonitor`](crate::ButtonMonitor)
/// configure and read pins. None of these methods can fail; handle hardware
/// errors internally.
///
/// `arm_edge_interrupt` must route both rising and falling edges of `pin` to
/// an interrupt handler that calls
/// [`ButtonMonitor::on_edge`](crate::ButtonMonitor::on_edge) (or
/// [`SharedMonitor::on_edge`](crate::SharedMonitor::on_edge)) with the same
/// pin, and acknowledge the interrupt there.
pub trait ButtonPins {
    /// Reads the current logic level of `pin`.
    fn read_level(&mut self, pin: PinId) -> bool;

    /// Configures the input pull resistor of `pin`.
    fn configure_pull(&mut self, pin: PinId, pull: Pull);

    /// Enables interrupt generation on any edge of `pin`.
    fn arm_edge_interrupt(&mut self, pin: PinId);

    /// Disables interrupt generation for `pin`.
    fn disarm_edge_interrupt(&mut self, pin: PinId);
}
