// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod reading;
pub mod timing;

// --- Re-export key types/traits/functions for easier access ---

// From error.rs
pub use error::Gp2yError;

// From frame.rs
pub use frame::{
    checksum, BodyBuf, FrameDefect, RawFrame, BODY_LEN, END_BYTE, FRAME_LEN, PAYLOAD_LEN,
    START_BYTE,
};

// From hal_traits.rs
pub use hal_traits::{Gp2yInstant, Gp2ySerial, Gp2yTimer};

// From reading.rs
pub use reading::{dust_density_ug_m3, Reading};

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
