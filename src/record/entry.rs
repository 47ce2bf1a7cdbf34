//! Partition slot structure

use crate::chs;
use crate::types::SectorAddress;
use gpt_disk_types::{U16Le, U32Le};

/// One partition slot of a boot record (16 bytes on disk)
///
/// The cylinder/sector pairs are stored packed; use the accessor
/// methods rather than the raw fields to obtain usable values.
#[repr(C, packed)]
#[derive(Debug, Clone, Copy)]
pub struct PartitionEntry {
    /// Boot indicator (0x80 = active)
    pub boot_flag: u8,
    /// Head of the partition's first sector
    pub start_head: u8,
    /// Packed cylinder/sector of the partition's first sector
    pub start_cyl_sec: U16Le,
    /// Filesystem type code
    pub fs_type: u8,
    /// Head of the partition's last sector
    pub end_head: u8,
    /// Packed cylinder/sector of the partition's last sector
    pub end_cyl_sec: U16Le,
    /// LBA of the partition's first sector
    pub lba_start: U32Le,
    /// Sector count
    pub total_sectors: U32Le,
}

impl PartitionEntry {
    /// Slot size on disk
    pub const SIZE: usize = 16;
    /// Type code of an unused slot
    pub const UNUSED: u8 = 0x00;
    /// Extended partition, CHS addressing
    pub const EXTENDED: u8 = 0x05;
    /// Extended partition, LBA addressing
    pub const EXTENDED_LBA: u8 = 0x0F;
    /// Boot manager partition
    pub const BOOT_MANAGER: u8 = 0x0A;
    /// Active bit in `boot_flag`
    pub const ACTIVE: u8 = 0x80;

    /// Whether the slot holds no partition.
    pub fn is_unused(&self) -> bool {
        self.fs_type == Self::UNUSED
    }

    /// Whether the slot points at an extended boot record.
    pub fn is_extended(&self) -> bool {
        matches!(self.fs_type, Self::EXTENDED | Self::EXTENDED_LBA)
    }

    /// Whether the slot holds the boot manager partition.
    pub fn is_boot_manager(&self) -> bool {
        self.fs_type == Self::BOOT_MANAGER
    }

    /// Whether the BIOS active flag is set.
    pub fn is_active(&self) -> bool {
        self.boot_flag & Self::ACTIVE != 0
    }

    /// Cylinder of the partition's first sector.
    pub fn start_cylinder(&self) -> u16 {
        chs::decode_cylinder(self.start_cyl_sec.to_u16())
    }

    /// Sector number (1-based) of the partition's first sector.
    pub fn start_sector(&self) -> u8 {
        chs::decode_sector(self.start_cyl_sec.to_u16())
    }

    /// Cylinder of the partition's last sector.
    pub fn end_cylinder(&self) -> u16 {
        chs::decode_cylinder(self.end_cyl_sec.to_u16())
    }

    /// Sector number (1-based) of the partition's last sector.
    pub fn end_sector(&self) -> u8 {
        chs::decode_sector(self.end_cyl_sec.to_u16())
    }

    /// Sector count of the partition.
    pub fn sectors(&self) -> u32 {
        self.total_sectors.to_u32()
    }

    /// Partition size in whole megabytes, assuming 512-byte sectors.
    pub fn size_mb(&self) -> u32 {
        self.total_sectors.to_u32() / 2048
    }

    /// CHS address of the partition's first sector on `disk`.
    pub fn start_address(&self, disk: u8) -> SectorAddress {
        SectorAddress {
            disk,
            head: self.start_head,
            cylinder: self.start_cylinder(),
            sector: self.start_sector(),
        }
    }
}
