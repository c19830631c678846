// src/common/frame.rs

use arrayvec::ArrayVec;

/// Marks the beginning of every frame.
pub const START_BYTE: u8 = 0xAA;
/// Marks the end of every frame.
pub const END_BYTE: u8 = 0xFF;
/// Total frame length on the wire, start byte included.
pub const FRAME_LEN: usize = 7;
/// Bytes following the start byte: payload(4), checksum(1), end(1).
pub const BODY_LEN: usize = 6;
/// Payload bytes covered by the checksum: VoutH, VoutL, VrefH, VrefL.
pub const PAYLOAD_LEN: usize = 4;

/// Buffer for a frame body as it arrives off the wire. May hold fewer than
/// [`BODY_LEN`] bytes if the link stalls mid-frame.
pub type BodyBuf = ArrayVec<u8, BODY_LEN>;

/// Calculates the sensor's 8-bit additive checksum over the payload bytes.
///
/// The sum may exceed 8 bits; only the low 8 bits are kept, matching the
/// 8-bit checksum field on the wire.
#[inline]
pub fn checksum(payload: &[u8]) -> u8 {
    payload.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte))
}

/// Why a received frame was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub enum FrameDefect {
    /// The link stalled mid-frame: fewer than 6 bytes followed the start byte.
    #[error("truncated body: got {got} of 6 bytes")]
    Truncated { got: u8 },

    /// The 7th byte of the frame was not the end marker.
    #[error("bad end byte: {found:#04x}")]
    BadEndByte { found: u8 },

    /// Received checksum does not match the calculated checksum.
    #[error("checksum mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    ChecksumMismatch { expected: u8, calculated: u8 },
}

/// A fully validated sensor frame.
///
/// Only the payload is retained; a `RawFrame` can only be constructed from a
/// body whose length, end byte, and checksum all check out.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RawFrame {
    payload: [u8; PAYLOAD_LEN],
}

impl RawFrame {
    /// Validates the bytes following a start byte.
    ///
    /// Checks length, then the end marker, then the checksum, in that order:
    /// a structurally broken frame is reported as such even if its checksum
    /// field happens to match.
    pub fn from_body(body: &BodyBuf) -> Result<Self, FrameDefect> {
        if body.len() < BODY_LEN {
            return Err(FrameDefect::Truncated {
                got: body.len() as u8,
            });
        }
        let end = body[BODY_LEN - 1];
        if end != END_BYTE {
            return Err(FrameDefect::BadEndByte { found: end });
        }

        let payload = [body[0], body[1], body[2], body[3]];
        let expected = body[PAYLOAD_LEN];
        let calculated = checksum(&payload);
        if expected != calculated {
            return Err(FrameDefect::ChecksumMismatch {
                expected,
                calculated,
            });
        }

        Ok(RawFrame { payload })
    }

    /// The four payload bytes: VoutH, VoutL, VrefH, VrefL.
    #[inline]
    pub const fn payload(&self) -> &[u8; PAYLOAD_LEN] {
        &self.payload
    }

    /// The 10-bit ADC word assembled from VoutH/VoutL.
    #[inline]
    pub fn vout_raw(&self) -> u16 {
        u16::from(self.payload[0]) << 8 | u16::from(self.payload[1])
    }
}
