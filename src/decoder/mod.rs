// src/decoder/mod.rs

mod io_helpers;

use crate::common::{
    error::Gp2yError,
    frame::{BodyBuf, FrameDefect, RawFrame, BODY_LEN, START_BYTE},
    hal_traits::{Gp2ySerial, Gp2yTimer},
    reading::Reading,
    timing,
};
use core::fmt::Debug;
use core::time::Duration;

/// Decoder tuning knobs, fixed at construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderConfig {
    /// Consecutive invalid frames tolerated before the decoder latches a
    /// fault. Must be greater than zero.
    pub failure_threshold: u8,
    /// How long the sync search waits for any byte before reporting
    /// [`Gp2yError::LinkClosed`].
    pub sync_timeout: Duration,
    /// Per-byte deadline while reading a frame body; expiry counts as a
    /// truncated frame.
    pub byte_timeout: Duration,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        DecoderConfig {
            failure_threshold: 5,
            sync_timeout: timing::DEFAULT_SYNC_TIMEOUT,
            byte_timeout: timing::DEFAULT_BYTE_TIMEOUT,
        }
    }
}

/// Frame-synchronizing decoder for one sensor session.
///
/// Owns the failure-escalation state: isolated line noise is tolerated, but
/// once `failure_threshold` consecutive frames have been discarded the
/// decoder latches [`Gp2yError::SensorFault`] and refuses further readings.
/// One instance per session; not safe to drive from multiple callers.
#[derive(Debug)]
pub struct FrameDecoder<IF>
where
    IF: Gp2ySerial + Gp2yTimer,
    IF::Error: Debug,
{
    interface: IF,
    config: DecoderConfig,
    consecutive_failures: u8,
    faulted: bool,
    primed: bool,
}

impl<IF> FrameDecoder<IF>
where
    IF: Gp2ySerial + Gp2yTimer,
    IF::Error: Debug,
{
    /// Creates a decoder with the default configuration (threshold 5).
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, DecoderConfig::default())
    }

    pub fn with_config(interface: IF, config: DecoderConfig) -> Self {
        debug_assert!(config.failure_threshold > 0);
        FrameDecoder {
            interface,
            config,
            consecutive_failures: 0,
            faulted: false,
            primed: false,
        }
    }

    /// Invalid frames seen since the last good one.
    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    /// True once the failure threshold has been reached. Terminal: a faulted
    /// decoder returns [`Gp2yError::SensorFault`] from every further call.
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Consumes the decoder and hands the interface back.
    pub fn release(self) -> IF {
        self.interface
    }

    /// Finds, validates, and decodes the next frame on the link.
    ///
    /// Each call handles at most one frame attempt: on a discarded frame it
    /// returns [`Gp2yError::FrameDiscarded`] and the caller simply asks
    /// again, re-entering the sync search from scratch. Blocks for at most
    /// one sync window plus one frame body's worth of byte deadlines.
    pub fn next_reading(&mut self) -> Result<Reading, Gp2yError<IF::Error>> {
        if self.faulted {
            return Err(Gp2yError::SensorFault {
                failures: self.consecutive_failures,
            });
        }
        if !self.primed {
            // Stale bytes buffered before the decoder attached have no
            // framing guarantee; drop them once per session.
            self.interface.flush_input().map_err(Gp2yError::Io)?;
            self.primed = true;
        }

        self.sync_to_start()?;
        let body = self.read_body()?;
        match RawFrame::from_body(&body) {
            Ok(frame) => {
                self.consecutive_failures = 0;
                Ok(Reading::from_frame(&frame))
            }
            Err(defect) => Err(self.record_failure(defect)),
        }
    }

    /// Discards bytes one at a time until a start byte arrives.
    ///
    /// Non-matching bytes are not an error: the link may be mid-frame when
    /// listening starts. The deadline applies per byte, so a noisy link that
    /// keeps talking never trips it; only a fully silent window does.
    fn sync_to_start(&mut self) -> Result<(), Gp2yError<IF::Error>> {
        loop {
            match self.read_byte_within(self.config.sync_timeout)? {
                Some(START_BYTE) => return Ok(()),
                Some(_) => continue,
                None => return Err(Gp2yError::LinkClosed),
            }
        }
    }

    /// Reads the bytes following a start byte. A per-byte deadline expiry
    /// hands back the short body; the validation step turns that into a
    /// truncated-frame defect rather than retrying the read silently.
    fn read_body(&mut self) -> Result<BodyBuf, Gp2yError<IF::Error>> {
        let mut body = BodyBuf::new();
        while body.len() < BODY_LEN {
            match self.read_byte_within(self.config.byte_timeout)? {
                Some(byte) => body.push(byte),
                None => break,
            }
        }
        Ok(body)
    }

    /// Counts one discarded frame, latching the fault state at the threshold.
    fn record_failure(&mut self, defect: FrameDefect) -> Gp2yError<IF::Error> {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        if self.consecutive_failures >= self.config.failure_threshold {
            self.faulted = true;
            Gp2yError::SensorFault {
                failures: self.consecutive_failures,
            }
        } else {
            Gp2yError::FrameDiscarded {
                defect,
                failures: self.consecutive_failures,
            }
        }
    }
}
