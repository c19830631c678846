// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point on a monotonic clock, used for read deadlines.
pub trait Gp2yInstant:
    Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> Gp2yInstant for T where
    T: Copy + PartialOrd + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Abstraction for timer/delay operations required by the decoder.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` plus a clock trait if embedded-hal v1 is
/// mandated; keeping it local avoids forcing a HAL choice on host-side users.
pub trait Gp2yTimer {
    /// Monotonic instant type produced by [`Gp2yTimer::now`].
    type Instant: Gp2yInstant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// The current instant on the monotonic clock.
    fn now(&self) -> Self::Instant;
}

/// Abstraction for the synchronous (non-blocking) sensor serial link.
///
/// The GP2Y1026AU0F transmits unsolicited frames at 2400 baud 8N1; the
/// decoder only ever reads. A host implementation typically wraps a serial
/// port opened with a short timeout, an embedded one wraps a UART peripheral.
pub trait Gp2ySerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Ok(byte)` if a byte was read, or `Err(nb::Error::WouldBlock)`
    /// if no byte is available yet. Other errors are returned as
    /// `Err(nb::Error::Other(Self::Error))`.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Discards any bytes already buffered by the link.
    ///
    /// Called once per session before the first frame is decoded: bytes
    /// received before the decoder attached carry no framing guarantee and
    /// must not be mistaken for a live frame.
    fn flush_input(&mut self) -> Result<(), Self::Error>;
}
