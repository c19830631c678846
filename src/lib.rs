// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod decoder;

// Re-export key types for convenience
pub use common::Gp2yError;
pub use common::{dust_density_ug_m3, FrameDefect, Reading};
pub use decoder::{DecoderConfig, FrameDecoder};
