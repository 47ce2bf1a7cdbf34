//! Filesystem type catalog
//!
//! Maps the one-byte partition type code to a fixed-width display
//! label. Every label is exactly seven characters, space-padded, so
//! listings line up without further formatting.

/// First type code the catalog considers unmountable
///
/// Logical drives with a type at or above this boundary receive no
/// drive letter.
pub const MOUNTABLE_LIMIT: u8 = 0x4B;

/// Whether a logical drive of this type receives a drive letter.
pub fn is_mountable(code: u8) -> bool {
    code < MOUNTABLE_LIMIT
}

/// Seven-character display label for a partition type code.
///
/// Unknown codes map to seven spaces.
pub fn label_for(code: u8) -> &'static str {
    match code {
        0x00 => "UNUSED ",
        0x01 => "FAT-12 ",
        0x02 | 0x03 => "XENIX  ",
        0x04 => "FAT-16 ",
        0x05 | 0x0F => "EXTEND ",
        0x06 => "BIGDOS ",
        0x07 => "HPFS   ",
        0x08 => "AIX    ",
        0x09 => "AIXBOOT",
        0x0A => "BOOTMNG",
        0x0B | 0x0C => "WIN95  ",
        0x0E => "VFAT   ",
        0x10 => "OPUS   ",
        0x12 => "DIAGS  ",
        0x40 => "VENIX  ",
        0x42 => "SFS    ",
        0x4D | 0x4E | 0x4F => "QNX4   ",
        0x50 | 0x51 => "ONTRACK",
        0x52 | 0xDB => "CP/M   ",
        0x61 | 0xE1 => "SPEEDST",
        0x63 => "UNIX   ",
        0x64 | 0x65 => "NETWARE",
        0x75 => "PC/IX  ",
        0x80 | 0x81 => "MINIX  ",
        0x82 => "LNXSWP ",
        0x83 => "LINUX  ",
        0x85 => "LNXEXT ",
        0x93 | 0x94 => "AMOEBA ",
        0xA5 => "FREEBSD",
        0xA6 => "OPENBSD",
        0xA7 => "NEXTSTP",
        0xB7 => "BSDI   ",
        0xB8 => "BSDISWP",
        0xC7 => "SYRINX ",
        0xEB => "BEOS   ",
        0xFF => "BBT    ",
        _ => "       ",
    }
}
