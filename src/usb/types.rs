use core::slice::from_raw_parts;

#[repr(packed)]
pub struct DeviceDesc {
    pub length            : u8,
    pub descriptor_type   : u8,
    pub usb               : u16,
    pub device_class      : u8,
    pub device_sub_class  : u8,
    pub device_protocol   : u8,
    pub max_packet_size0  : u8,
    pub vendor            : u16,
    pub product           : u16,
    pub device            : u16,
    pub i_manufacturer    : u8,
    pub i_product         : u8,
    pub i_serial          : u8,
    pub num_configurations: u8,
}
const _: () = const {assert!(size_of::<DeviceDesc>() == 18)};

#[repr(packed)]
pub struct ConfigurationDesc {
    pub length             : u8,
    pub descriptor_type    : u8,
    pub total_length       : u16,
    pub num_interfaces     : u8,
    pub configuration_value: u8,
    pub i_configuration    : u8,
    pub attributes         : u8,
    pub max_power          : u8,
}
const _: () = const {assert!(size_of::<ConfigurationDesc>() == 9)};

#[repr(packed)]
pub struct InterfaceDesc {
    pub length             : u8,
    pub descriptor_type    : u8,
    pub interface_number   : u8,
    pub alternate_setting  : u8,
    pub num_endpoints      : u8,
    pub interface_class    : u8,
    pub interface_sub_class: u8,
    pub interface_protocol : u8,
    pub i_interface        : u8,
}
const _: () = const {assert!(size_of::<InterfaceDesc>() == 9)};

/// DFU 1.1 class functional descriptor.
#[repr(packed)]
#[allow(non_camel_case_types)]
pub struct DFU_FunctionalDesc {
    pub length         : u8,
    pub descriptor_type: u8,
    pub attributes     : u8,
    pub detach_time_out: u16,
    pub transfer_size  : u16,
    pub dfu_version    : u16,
}
const _: () = const {assert!(size_of::<DFU_FunctionalDesc>() == 9)};

pub const TYPE_DEVICE        : u8 = 1;
pub const TYPE_CONFIGURATION : u8 = 2;
pub const TYPE_STRING        : u8 = 3;
pub const TYPE_INTERFACE     : u8 = 4;
pub const TYPE_DFU_FUNCTIONAL: u8 = 0x21;

/// Application specific class.
pub const CLASS_DFU: u8 = 0xfe;
pub const SUBCLASS_DFU: u8 = 1;
/// DFU mode, as opposed to run-time.
pub const PROTO_DFU_MODE: u8 = 2;

pub const DFU_ATTR_CAN_DNLOAD : u8 = 1 << 0;
pub const DFU_ATTR_CAN_UPLOAD : u8 = 1 << 1;
pub const DFU_ATTR_MANIF_TOL  : u8 = 1 << 2;
pub const DFU_ATTR_WILL_DETACH: u8 = 1 << 3;

#[repr(C)] // We keep the buffer aligned.
pub struct SetupHeader {
    pub request_type: u8,
    pub request     : u8,
    pub value_lo    : u8,
    pub value_hi    : u8,
    pub index       : u16,
    pub length      : u16,
}

/// Outcome of a descriptor lookup.
#[derive(Clone, Copy)]
pub enum SetupResult {
    /// Descriptor bytes to stream to the host.  Always the descriptor's
    /// full length; the control layer truncates to the host's wLength.
    Tx(&'static [u8]),
    /// No such descriptor; the control endpoint should stall.
    Stall,
}

impl SetupResult {
    /// View a static descriptor record as its raw bytes.
    pub const fn tx_data<T>(data: &'static T) -> SetupResult {
        SetupResult::Tx(unsafe {
            from_raw_parts(data as *const T as *const u8, size_of::<T>())})
    }
    pub const fn error() -> SetupResult {SetupResult::Stall}
}
