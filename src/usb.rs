//! The DFU device's USB descriptors.
//! Interfaces:
//! 0 alt 0: DFU flash download.
//! 0 alt 1: DFU EEPROM access ('eeprom' feature only).
//!
//! The control-transfer state machine lives outside this crate; on a
//! GET_DESCRIPTOR it calls [`get_descriptor`] with the parsed setup packet
//! and streams out whatever comes back, truncated to the host's wLength.

pub mod descriptor;
pub mod strings;
pub mod types;

pub use descriptor::get_descriptor;
