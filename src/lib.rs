#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonMonitor`**: Registry of watched pins and the interrupt entry point `on_edge`
//! - **`MonitoredButton`**: Per-pin debounce and press/release pairing state
//! - **`ButtonConfig`**: Active level, long-press threshold, debounce interval, pull and bounce policy
//! - **`ButtonEvent`**: Classified press (`SinglePress` or `LongPress`)
//! - **`ButtonPins`**: Trait to implement for your GPIO hardware
//! - **`ButtonHandler`**: Trait for event receivers, implemented for `FnMut(PinId, ButtonEvent)`
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//! - **`SharedMonitor`**: Critical-section guarded slot for driving a monitor from interrupts
//!
//! Presses are classified when the button is released: a press held for
//! longer than the threshold is a `LongPress`, anything shorter a
//! `SinglePress`. No timers or polling are involved.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod platform;
pub mod handler;
pub mod button;
pub mod monitor;
pub mod shared;

pub use button::{EdgeOutcome, MonitoredButton};
pub use handler::ButtonHandler;
pub use monitor::{ButtonMonitor, MonitorError};
pub use platform::ButtonPins;
pub use shared::SharedMonitor;
pub use time::{MillisInstant, Milliseconds, TimeDuration, TimeInstant, TimeSource};
pub use types::{ActiveLevel, BouncePolicy, ButtonConfig, ButtonEvent, DEFAULT_DEBOUNCE_MS, PinId, Pull};
