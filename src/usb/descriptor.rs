//! The device and configuration descriptors, and the GET_DESCRIPTOR lookup.

use crate::config;
use super::strings::{self, string_index};
use super::types::*;

/// Both alternate settings live on this one interface.
pub const INTF_DFU: u8 = 0;
pub const ALT_FLASH: u8 = 0;
#[cfg(feature = "eeprom")]
pub const ALT_EEPROM: u8 = 1;

pub static DEVICE_DESC: DeviceDesc = DeviceDesc{
    length            : size_of::<DeviceDesc>() as u8,
    descriptor_type   : TYPE_DEVICE,
    usb               : 0x200,
    device_class      : 0, // Per interface.
    device_sub_class  : 0,
    device_protocol   : 0,
    max_packet_size0  : config::EP0_SIZE,
    vendor            : config::VENDOR_ID,
    product           : config::PRODUCT_ID,
    device            : 0x100,
    i_manufacturer    : string_index(config::STR_MANUFACTURER),
    i_product         : string_index(config::STR_PRODUCT),
    i_serial          : string_index(config::STR_SERIAL),
    num_configurations: 1,
};

/// The whole GET_DESCRIPTOR(CONFIGURATION) response.  total_length comes
/// from size_of, so the optional eeprom interface can't desync it.
#[repr(packed)]
#[allow(dead_code)]
pub struct ConfigDfu {
    config : ConfigurationDesc,
    flash  : InterfaceDesc,
    #[cfg(feature = "eeprom")]
    eeprom : InterfaceDesc,
    dfufunc: DFU_FunctionalDesc,
}
const _: () = const {assert!(size_of::<ConfigDfu>()
    == 27 + if cfg!(feature = "eeprom") {9} else {0})};

/// With upload enabled the host drives re-enumeration itself, so WILL_DETACH
/// must stay clear; otherwise we detach ourselves on DFU_DETACH.
const DFU_ATTRIBUTES: u8 = if cfg!(feature = "upload") {
    DFU_ATTR_CAN_DNLOAD | DFU_ATTR_CAN_UPLOAD | DFU_ATTR_MANIF_TOL
} else {
    DFU_ATTR_CAN_DNLOAD | DFU_ATTR_WILL_DETACH | DFU_ATTR_MANIF_TOL
};

pub static CONFIG_DESC: ConfigDfu = ConfigDfu{
    config: ConfigurationDesc{
        length             : size_of::<ConfigurationDesc>() as u8,
        descriptor_type    : TYPE_CONFIGURATION,
        total_length       : size_of::<ConfigDfu>() as u16,
        num_interfaces     : 1,
        configuration_value: 1,
        i_configuration    : string_index("DFU mode"),
        attributes         : 0xc0, // Reserved | self powered.
        max_power          : 50,   // 100mA
    },
    flash: InterfaceDesc{
        length             : size_of::<InterfaceDesc>() as u8,
        descriptor_type    : TYPE_INTERFACE,
        interface_number   : INTF_DFU,
        alternate_setting  : ALT_FLASH,
        num_endpoints      : 0,
        interface_class    : CLASS_DFU,
        interface_sub_class: SUBCLASS_DFU,
        interface_protocol : PROTO_DFU_MODE,
        i_interface        : string_index(config::STR_INTF_FLASH),
    },
    #[cfg(feature = "eeprom")]
    eeprom: InterfaceDesc{
        length             : size_of::<InterfaceDesc>() as u8,
        descriptor_type    : TYPE_INTERFACE,
        interface_number   : INTF_DFU,
        alternate_setting  : ALT_EEPROM,
        num_endpoints      : 0,
        interface_class    : CLASS_DFU,
        interface_sub_class: SUBCLASS_DFU,
        interface_protocol : PROTO_DFU_MODE,
        i_interface        : string_index(config::STR_INTF_EEPROM),
    },
    dfufunc: DFU_FunctionalDesc{
        length         : size_of::<DFU_FunctionalDesc>() as u8,
        descriptor_type: TYPE_DFU_FUNCTIONAL,
        attributes     : DFU_ATTRIBUTES,
        detach_time_out: config::DETACH_TIMEOUT,
        transfer_size  : config::BLOCK_SIZE,
        dfu_version    : 0x110,
    },
};

/// Resolve a GET_DESCRIPTOR request to the descriptor's bytes.
///
/// The returned slice always carries the descriptor's true length,
/// total_length included for the configuration descriptor, even when the
/// host asked for less; the control layer truncates to setup.length when it
/// streams the bytes out.  Unknown descriptor types and out-of-range string
/// indexes report a stall.
pub fn get_descriptor(setup: &SetupHeader) -> SetupResult {
    match setup.value_hi {
        // Device descriptors are not indexed, so value_lo is ignored.
        TYPE_DEVICE => SetupResult::tx_data(&DEVICE_DESC),
        TYPE_CONFIGURATION => SetupResult::tx_data(&CONFIG_DESC),
        TYPE_STRING => strings::get_descriptor(setup.value_lo),
        _ => SetupResult::error(),
    }
}

#[cfg(test)]
fn resolve(dtype: u8, dindx: u8, length: u16) -> SetupResult {
    get_descriptor(&SetupHeader{
        request_type: 0x80, request: 0x06,
        value_lo: dindx, value_hi: dtype, index: 0, length})
}

#[cfg(test)]
fn resolve_bytes(dtype: u8, dindx: u8, length: u16) -> &'static [u8] {
    match resolve(dtype, dindx, length) {
        SetupResult::Tx(data) => data,
        SetupResult::Stall => panic!("descriptor {dtype}:{dindx} stalled"),
    }
}

#[test]
fn check_device() {
    let data = resolve_bytes(TYPE_DEVICE, 0, 64);
    assert_eq!(data.len(), 18);
    assert_eq!(data[0], 18);
    assert_eq!(data[1], TYPE_DEVICE);
    assert_eq!(data[7], config::EP0_SIZE);
    assert_eq!(u16::from_le_bytes([data[8], data[9]]), config::VENDOR_ID);
    assert_eq!(u16::from_le_bytes([data[10], data[11]]), config::PRODUCT_ID);
    assert_eq!(data[17], 1); // num_configurations
    // The device descriptor is not indexed.
    assert_eq!(resolve_bytes(TYPE_DEVICE, 7, 64), data);
}

#[test]
fn check_device_string_indexes() {
    let data = resolve_bytes(TYPE_DEVICE, 0, 64);
    for idx in [data[14], data[15], data[16]] {
        assert!(idx != 0 && (idx as usize) < strings::NUM_STRINGS);
        resolve_bytes(TYPE_STRING, idx, 255);
    }
}

#[test]
fn check_config_total_length() {
    let data = resolve_bytes(TYPE_CONFIGURATION, 0, 255);
    let interfaces = if cfg!(feature = "eeprom") {2} else {1};
    assert_eq!(data.len(), 9 + 9 * interfaces + 9);
    assert_eq!(data[0], 9);
    assert_eq!(data[1], TYPE_CONFIGURATION);
    assert_eq!(u16::from_le_bytes([data[2], data[3]]) as usize, data.len());
    assert_eq!(data[4], 1); // One interface, with alternate settings.
}

#[test]
fn check_config_short_request() {
    // A 9 byte request (header only) still resolves to the full composite;
    // truncation is the control layer's business.
    let data = resolve_bytes(TYPE_CONFIGURATION, 0, 9);
    assert_eq!(data.len(), size_of::<ConfigDfu>());
}

#[test]
fn check_interfaces() {
    let data = resolve_bytes(TYPE_CONFIGURATION, 0, 255);
    let mut alt = 0;
    for intf in data[9 .. data.len() - 9].chunks(9) {
        assert_eq!(intf[0], 9);
        assert_eq!(intf[1], TYPE_INTERFACE);
        assert_eq!(intf[2], INTF_DFU);
        assert_eq!(intf[3], alt);
        assert_eq!(intf[4], 0); // No endpoints beyond control.
        assert_eq!(&intf[5..8], [CLASS_DFU, SUBCLASS_DFU, PROTO_DFU_MODE]);
        assert!(intf[8] != 0 && (intf[8] as usize) < strings::NUM_STRINGS);
        alt += 1;
    }
    assert_eq!(alt, if cfg!(feature = "eeprom") {2} else {1});
}

#[test]
fn check_dfu_functional() {
    let data = resolve_bytes(TYPE_CONFIGURATION, 0, 255);
    let func = &data[data.len() - 9 ..];
    assert_eq!(func[0], 9);
    assert_eq!(func[1], TYPE_DFU_FUNCTIONAL);
    if cfg!(feature = "upload") {
        assert_eq!(func[2],
                   DFU_ATTR_CAN_DNLOAD | DFU_ATTR_CAN_UPLOAD
                   | DFU_ATTR_MANIF_TOL);
    }
    else {
        assert_eq!(func[2],
                   DFU_ATTR_CAN_DNLOAD | DFU_ATTR_WILL_DETACH
                   | DFU_ATTR_MANIF_TOL);
    }
    assert_eq!(u16::from_le_bytes([func[3], func[4]]), config::DETACH_TIMEOUT);
    assert_eq!(u16::from_le_bytes([func[5], func[6]]), config::BLOCK_SIZE);
    assert_eq!(u16::from_le_bytes([func[7], func[8]]), 0x110);
}

#[test]
fn check_strings_resolve() {
    for idx in 0 .. strings::NUM_STRINGS as u8 {
        let data = resolve_bytes(TYPE_STRING, idx, 255);
        assert_eq!(data[0] as usize, data.len());
        assert_eq!(data[1], TYPE_STRING);
    }
}

#[test]
fn check_failures() {
    // String index past the table.
    assert!(matches!(resolve(TYPE_STRING, 99, 255), SetupResult::Stall));
    // Types we don't serve standalone.
    for dtype in [0, TYPE_INTERFACE, 5, 6, TYPE_DFU_FUNCTIONAL, 0xff] {
        assert!(matches!(resolve(dtype, 0, 255), SetupResult::Stall));
    }
}
