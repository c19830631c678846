// src/common/reading.rs

use super::frame::RawFrame;

/// ADC full scale: the sensor module reports a 10-bit conversion.
pub const ADC_FULL_SCALE: f32 = 1024.0;
/// ADC reference voltage in volts.
pub const VREF_VOLTS: f32 = 5.0;
/// Documented sensor response: 0.35 V of output per 100 µg/m³ of dust.
pub const VOLTS_PER_100_UG_M3: f32 = 0.35;

/// One decoded sensor reading.
///
/// Stores the raw 10-bit ADC word so the exact wire value stays available;
/// the voltage views scale it against the 5 V reference on demand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub struct Reading {
    raw: u16,
}

impl Reading {
    pub(crate) fn from_frame(frame: &RawFrame) -> Self {
        Reading {
            raw: frame.vout_raw(),
        }
    }

    /// The raw ADC count before any scaling.
    #[inline]
    pub const fn raw_counts(&self) -> u16 {
        self.raw
    }

    /// Sensor output voltage in volts, in [0.0, 5.0] for in-range ADC words.
    #[inline]
    pub fn volts(&self) -> f32 {
        f32::from(self.raw) / ADC_FULL_SCALE * VREF_VOLTS
    }

    /// Sensor output voltage in millivolts.
    #[inline]
    pub fn millivolts(&self) -> f32 {
        self.volts() * 1000.0
    }

    /// Estimated dust density in µg/m³ for this reading.
    #[inline]
    pub fn dust_density_ug_m3(&self) -> f32 {
        dust_density_ug_m3(self.volts())
    }
}

/// Converts a sensor output voltage to an estimated dust density in µg/m³.
///
/// Pure linear scale from the sensor datasheet; stateless, usable without a
/// decoder.
#[inline]
pub fn dust_density_ug_m3(volts: f32) -> f32 {
    volts * (100.0 / VOLTS_PER_100_UG_M3)
}
