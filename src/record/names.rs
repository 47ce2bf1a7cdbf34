//! Boot manager name table
//!
//! The boot manager keeps its menu in a single sector three sectors
//! past the start of its own partition: 32 slots of 16 bytes, one per
//! possible partition slot across eight disks. Slot
//! `(disk - 1) * 4 + mbr_slot` describes the matching partition.

use crate::types::SECTOR_SIZE;

/// One slot of the boot manager name table (16 bytes on disk)
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct BootNameEntry {
    /// Menu flags
    pub flags: u8,
    /// Menu display name, space-padded
    pub name: [u8; 8],
    /// Reserved
    pub reserved: [u8; 7],
}

impl BootNameEntry {
    /// Slot size on disk
    pub const SIZE: usize = 16;
    /// Bootable bit in `flags`
    pub const BOOTABLE: u8 = 0x01;

    /// Whether the menu marks this partition bootable.
    pub fn is_bootable(&self) -> bool {
        self.flags & Self::BOOTABLE != 0
    }
}

/// Decoded boot manager name sector
#[derive(Clone)]
pub struct NameTable {
    raw: [u8; SECTOR_SIZE],
}

impl NameTable {
    /// Number of slots in the name sector
    pub const SLOTS: usize = SECTOR_SIZE / BootNameEntry::SIZE;

    /// Keep a copy of a raw name sector.
    pub fn parse(sector: &[u8; SECTOR_SIZE]) -> Self {
        Self { raw: *sector }
    }

    /// Slot `index` of the table.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`NameTable::SLOTS`].
    pub fn entry(&self, index: usize) -> &BootNameEntry {
        let offset = index * BootNameEntry::SIZE;
        let slot = &self.raw[offset..offset + BootNameEntry::SIZE];
        // BootNameEntry is alignment 1, so any position in the sector
        // is a valid place to read one.
        unsafe { &*(slot.as_ptr() as *const BootNameEntry) }
    }

    /// Whether slot `index` is marked bootable.
    pub fn is_bootable(&self, index: usize) -> bool {
        self.entry(index).is_bootable()
    }

    /// Menu name stored in slot `index`.
    pub fn name(&self, index: usize) -> [u8; 8] {
        self.entry(index).name
    }
}
