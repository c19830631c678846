// src/common/error.rs

use super::frame::FrameDefect;

#[derive(Debug, thiserror::Error)]
pub enum Gp2yError<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Io error
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// A frame failed validation and was discarded.
    ///
    /// Recoverable: the caller should simply request the next reading. The
    /// running failure count is carried so callers can log escalation.
    #[error("frame discarded ({defect}), {failures} consecutive failure(s)")]
    FrameDiscarded { defect: FrameDefect, failures: u8 },

    /// Too many consecutive invalid frames; the sensor or link is unusable
    /// until re-initialized. Terminal for this decoder instance.
    #[error("sensor fault: {failures} consecutive invalid frames")]
    SensorFault { failures: u8 },

    /// The link produced no data at all within the sync window.
    ///
    /// Terminal, and distinct from [`Gp2yError::SensorFault`]: the link is
    /// gone, rather than producing bad data.
    #[error("link closed: no data within the sync window")]
    LinkClosed,
}

// No manual Display impl needed - thiserror handles it.

// Allow mapping from underlying HAL error if From is implemented
impl<E: core::fmt::Debug> From<E> for Gp2yError<E> {
    fn from(e: E) -> Self {
        Gp2yError::Io(e)
    }
}

// Note: For the Io(E) variant's #[error("...")] message to work correctly even
// in no_std, the underlying error type `E` must implement `core::fmt::Debug`.
