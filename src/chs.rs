//! Packed cylinder/sector field codec
//!
//! Partition slots store cylinder and sector in one 16-bit field read
//! little-endian from disk: the low byte carries the sector number in
//! bits 0-5 and the cylinder's top two bits in bits 6-7, the high
//! byte carries the cylinder's low eight bits.

/// Extract the 10-bit cylinder number from a packed field.
pub fn decode_cylinder(packed: u16) -> u16 {
    ((packed & 0x00C0) << 2) | ((packed & 0xFF00) >> 8)
}

/// Extract the 6-bit sector number (1-based) from a packed field.
pub fn decode_sector(packed: u16) -> u8 {
    (packed & 0x003F) as u8
}

/// Pack a cylinder and sector back into the on-disk field.
///
/// Cylinders above 1023 and sectors above 63 are truncated to the
/// bits the field can hold.
pub fn encode(cylinder: u16, sector: u8) -> u16 {
    let low = (sector as u16 & 0x003F) | ((cylinder & 0x0300) >> 2);
    let high = (cylinder & 0x00FF) << 8;
    high | low
}
