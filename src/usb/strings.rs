//! The string descriptor table, encoded to UTF-16 at compile time.
//!
//! A string's position in [`STRING_LIST`] is the index the other descriptors
//! quote, so the order is part of the protocol: 0 is the language-ID list
//! (not text), then manufacturer, product, configuration name and the
//! interface names, with the serial number last.  Do not reorder.

use crate::config;
use super::types::SetupResult;

type Offset = u8;

#[cfg(not(feature = "eeprom"))]
pub const STRING_LIST: [&str; 6] = [
    "\u{0409}", // Languages.
    config::STR_MANUFACTURER, config::STR_PRODUCT, "DFU mode",
    config::STR_INTF_FLASH, config::STR_SERIAL,
];
#[cfg(feature = "eeprom")]
pub const STRING_LIST: [&str; 7] = [
    "\u{0409}", // Languages.
    config::STR_MANUFACTURER, config::STR_PRODUCT, "DFU mode",
    config::STR_INTF_FLASH, config::STR_INTF_EEPROM, config::STR_SERIAL,
];

pub const NUM_STRINGS: usize = STRING_LIST.len();

/// Look up a string's descriptor index from its content.  Asking for a
/// string that is not in the table is a build error (the loop runs off the
/// end of the table during const evaluation).
pub const fn string_index(s: &str) -> u8 {
    let mut i = 0;
    loop {
        if konst::eq_str(STRING_LIST[i as usize], s) {
            return i;
        }
        i += 1;
    }
}

/// UTF-16 code units per entry, excluding the 2 byte descriptor header.
const LENGTHS: [usize; NUM_STRINGS] = {
    let mut l = [0; NUM_STRINGS];
    let mut i = 0;
    while i < NUM_STRINGS {
        l[i] = str_utf16_count(STRING_LIST[i]);
        i += 1;
    }
    l
};

/// Start of each entry in [`DATA`], in u16 units.
const OFFSETS: [Offset; NUM_STRINGS] = {
    let mut o = [0; NUM_STRINGS];
    let mut p = 0;
    let mut i = 0;
    while i < NUM_STRINGS {
        o[i] = p;
        p += LENGTHS[i] as Offset + 1;
        i += 1;
    }
    o
};

const TOTAL_LENGTH: usize = OFFSETS[NUM_STRINGS - 1] as usize
    + LENGTHS[NUM_STRINGS - 1] + 1;

/// All the string descriptors, back to back.  u16 so each descriptor starts
/// aligned; byte layout assumes a little-endian target.
static DATA: [u16; TOTAL_LENGTH] = {
    let mut d = [0; TOTAL_LENGTH];
    let mut i = 0;
    while i < NUM_STRINGS {
        let start = OFFSETS[i] as usize;
        // Byte count (length*2+2) and descriptor type (3) as one LE word.
        d[start] = LENGTHS[i] as u16 * 2 + 2 + 0x300;
        str_to_utf16_at(&mut d, start + 1, STRING_LIST[i]);
        i += 1;
    }
    d
};

pub fn get_descriptor(idx: u8) -> SetupResult {
    if idx as usize >= NUM_STRINGS {
        return SetupResult::error();
    }
    let entry = &DATA[OFFSETS[idx as usize] as usize ..];
    let len = entry[0] as usize & 255;
    let data: &[u8] = unsafe {core::slice::from_raw_parts(
        entry.as_ptr() as *const u8, len)};
    SetupResult::Tx(data)
}

const fn str_utf16_count(s: &str) -> usize {
    let mut n = 0;
    konst::iter::for_each!{c in konst::string::chars(s) =>
        n += if (c as u32) < 0x10000 {1} else {2};
    }
    n
}

const fn str_to_utf16_at(u: &mut [u16], at: usize, s: &str) {
    let mut i = at;
    konst::iter::for_each!{c in konst::string::chars(s) =>
        if (c as u32) < 0x10000 {
            u[i] = c as u16;
        }
        else {
            let c = c as u32 - 0x10000;
            u[i] = (c >> 10) as u16 + 0xd800;
            i += 1;
            u[i] = (c & 0x3ff) as u16 + 0xdc00;
        }
        i += 1;
    }
}

#[cfg(test)]
fn descriptor_bytes(idx: u8) -> &'static [u8] {
    match get_descriptor(idx) {
        SetupResult::Tx(data) => data,
        SetupResult::Stall => panic!("string {idx} stalled"),
    }
}

#[test]
fn check_language_list() {
    // Index 0 is the language ID list, US English only.
    let data = descriptor_bytes(0);
    assert_eq!(data, [4, 3, 0x09, 0x04]);
}

#[test]
fn check_encoding() {
    for idx in 1 .. NUM_STRINGS {
        let data = descriptor_bytes(idx as u8);
        assert_eq!(data[0] as usize, data.len());
        assert_eq!(data[1], 3);
        let mut units = STRING_LIST[idx].encode_utf16();
        for pair in data[2..].chunks(2) {
            assert_eq!(u16::from_le_bytes([pair[0], pair[1]]),
                       units.next().unwrap());
        }
        assert!(units.next().is_none());
    }
}

#[test]
fn check_out_of_range() {
    for idx in [NUM_STRINGS as u8, 99, 255] {
        assert!(matches!(get_descriptor(idx), SetupResult::Stall));
    }
}

#[test]
fn check_serial_is_last() {
    assert_eq!(string_index(config::STR_SERIAL) as usize, NUM_STRINGS - 1);
}
