//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`MillisInstant`] and [`Milliseconds`], a ready-made pair for
//! platforms that expose a free-running `u32` millisecond tick counter.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Tick counters on small targets wrap. Implementations backed by such a
    /// counter must use unsigned wrapping subtraction so that an interval
    /// spanning the wrap point is still measured correctly.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration backed by a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Milliseconds(pub u32);

impl TimeDuration for Milliseconds {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    /// Saturates at `u32::MAX` milliseconds (about 49.7 days).
    fn from_millis(millis: u64) -> Self {
        Milliseconds(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// Point in time read from a wrapping `u32` millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisInstant(pub u32);

impl MillisInstant {
    /// Returns the raw tick value.
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl TimeInstant for MillisInstant {
    type Duration = Milliseconds;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Milliseconds(self.0.wrapping_sub(earlier.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_handles_counter_wrap() {
        let before_wrap = MillisInstant(u32::MAX - 20);
        let after_wrap = MillisInstant(30);

        assert_eq!(after_wrap.duration_since(before_wrap), Milliseconds(51));
    }

    #[test]
    fn from_millis_saturates() {
        assert_eq!(Milliseconds::from_millis(4000), Milliseconds(4000));
        assert_eq!(Milliseconds::from_millis(u64::MAX), Milliseconds(u32::MAX));
    }
}
