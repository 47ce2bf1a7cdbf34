//! Common types and constants for partition discovery

use gpt_disk_types::DiskGeometry;

/// Size of one disk sector in bytes
pub const SECTOR_SIZE: usize = 512;

/// Highest number of physical disks the walk will touch
pub const MAX_DISKS: u8 = 8;

/// Partition slots per boot record
pub const SLOTS_PER_RECORD: usize = 4;

/// Upper bound on extended boot records followed per disk
pub const MAX_CHAIN: usize = 128;

/// Letter assigned to every primary partition
pub const FIRST_DRIVE_LETTER: char = 'C';

/// Physical address of one sector in CHS form
///
/// Disks are numbered from 1, sectors from 1; heads and cylinders
/// from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorAddress {
    /// Physical disk number (1-based)
    pub disk: u8,
    /// Head
    pub head: u8,
    /// Cylinder (0..1024)
    pub cylinder: u16,
    /// Sector within the track (1-based, 1..64)
    pub sector: u8,
}

impl SectorAddress {
    /// Address of the Master Boot Record on `disk`.
    pub const fn mbr(disk: u8) -> Self {
        Self {
            disk,
            head: 0,
            cylinder: 0,
            sector: 1,
        }
    }

    /// Logical block address of this sector under `geometry`.
    pub fn lba(&self, geometry: &DiskGeometry) -> u64 {
        (self.cylinder as u64 * geometry.heads_per_cylinder as u64 + self.head as u64)
            * geometry.sectors_per_track as u64
            + self.sector.saturating_sub(1) as u64
    }
}

/// One discovered partition
///
/// Produced once per primary partition or logical drive during a
/// discovery pass and owned by the returned
/// [`PartitionList`](crate::PartitionList).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRecord {
    /// Physical disk holding the partition (1-based)
    pub disk: u8,

    /// Boot menu display name, present only when the boot manager
    /// marks the partition bootable
    pub boot_name: Option<[u8; 8]>,

    /// Inferred drive letter, absent for logical drives whose type
    /// the catalog considers unmountable
    pub drive_letter: Option<char>,

    /// Raw filesystem type code from the partition slot
    pub type_code: u8,

    /// Seven-character catalog label for `type_code`
    pub type_label: &'static str,

    /// Whether the partition came from an MBR slot rather than an
    /// extended chain
    pub primary: bool,

    /// Whether the boot manager menu marks the partition bootable
    pub bootable: bool,

    /// Partition size in whole megabytes
    pub size_mb: u32,
}

impl PartitionRecord {
    /// Boot menu name as a string slice.
    ///
    /// Trailing NULs and spaces are stripped. Returns `None` when no
    /// name is attached or the bytes are not valid UTF-8.
    pub fn boot_name_str(&self) -> Option<&str> {
        let name = self.boot_name.as_ref()?;
        let mut end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
        while end > 0 && name[end - 1] == b' ' {
            end -= 1;
        }
        core::str::from_utf8(&name[..end]).ok()
    }
}
