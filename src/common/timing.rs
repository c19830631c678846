// src/common/timing.rs

use core::time::Duration;

// The sensor transmits continuously at 2400 baud, 8N1. These are nominal
// values; HAL implementations should factor in their own clock tolerance.

// === Byte Timing at 2400 Baud (8N1) ===
// 1 start bit + 8 data bits + 1 stop bit = 10 bits per byte
// Time per bit = 1 / 2400 seconds = 0.4166... ms
// Time per byte = 10 / 2400 seconds = 4.166... ms

/// Nominal duration of a single bit at 2400 baud.
pub const BIT_DURATION: Duration = Duration::from_nanos(416_667); // Approx 0.417 ms
/// Nominal duration of a single byte (10 bits total) at 2400 baud (8N1 format).
pub const BYTE_DURATION: Duration = Duration::from_micros(4167); // Approx 4.17 ms

// === Decoder Deadlines ===

/// Default window the sync search will wait for *any* byte before reporting
/// the link closed. Matches the 1 s port timeout the sensor is usually
/// driven with.
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(1);

/// Default per-byte deadline while reading a frame body. The sensor sends
/// all 7 bytes of a frame back-to-back, so a gap much longer than a byte
/// time means the link stalled mid-frame.
pub const DEFAULT_BYTE_TIMEOUT: Duration = Duration::from_millis(50);
