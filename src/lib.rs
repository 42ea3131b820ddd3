//! USB enumeration descriptors for a DFU bootloader.
//!
//! Everything here is immutable static data plus a pure lookup: the
//! control-transfer layer parses the setup packet and hands GET_DESCRIPTOR
//! requests to [`usb::get_descriptor`], which resolves descriptor type and
//! index to a `&'static [u8]` of descriptor bytes, or asks for a stall.
//! There is no state and no I/O, so the lookup is safe to call from an
//! interrupt handler.

#![no_std]

pub mod config;
pub mod usb;
