//! Device identity and DFU parameters.  These get copied verbatim into the
//! descriptor tables; nothing in this crate interprets them.

/// STMicroelectronics.
pub const VENDOR_ID: u16 = 0x0483;
/// The stock "device in DFU mode" product ID.
pub const PRODUCT_ID: u16 = 0xdf11;

/// Max packet size for the control endpoint.
pub const EP0_SIZE: u8 = 8;

/// DFU transfer block size in bytes.  One flash page.
pub const BLOCK_SIZE: u16 = 0x800;

/// wDetachTimeout in ms.
pub const DETACH_TIMEOUT: u16 = 250;

pub const STR_MANUFACTURER: &str = "Your company name";
pub const STR_PRODUCT: &str = "Secure bootloader";
pub const STR_INTF_FLASH: &str = "Internal flash";
#[cfg(feature = "eeprom")]
pub const STR_INTF_EEPROM: &str = "Internal EEPROM";
pub const STR_SERIAL: &str = "0000000000";
