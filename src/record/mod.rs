//! On-disk boot record structures
//!
//! MBR and EBR sectors share one layout: 446 bytes of boot code and
//! disk metadata, four 16-byte partition slots, and a 2-byte
//! signature. The signature is deliberately not checked; drives
//! formatted by older tools omit it, and a sector that read
//! successfully is trusted as a record.

pub mod entry;
pub mod names;

pub use entry::PartitionEntry;
pub use names::{BootNameEntry, NameTable};

use crate::types::{SECTOR_SIZE, SLOTS_PER_RECORD};
use gpt_disk_types::U16Le;

/// A raw MBR or EBR sector
#[repr(C, packed)]
pub struct BootRecord {
    /// Boot code and disk metadata preceding the partition table
    pub boot_code: [u8; 446],
    /// The partition slots, in table order
    pub entries: [PartitionEntry; SLOTS_PER_RECORD],
    /// Record signature, 0xAA55 when present
    pub signature: U16Le,
}

impl BootRecord {
    /// Byte offset of the first partition slot
    pub const TABLE_OFFSET: usize = 446;

    /// Reinterpret a raw sector as a boot record.
    ///
    /// No validation is performed; a sector obtained from a
    /// successful read is taken at face value.
    pub fn parse(sector: &[u8; SECTOR_SIZE]) -> &Self {
        // BootRecord is alignment 1 and exactly one sector long, so
        // the cast is always in bounds.
        unsafe { &*(sector.as_ptr() as *const Self) }
    }

    /// Copy of the partition slot at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`SLOTS_PER_RECORD`].
    pub fn entry(&self, slot: usize) -> PartitionEntry {
        self.entries[slot]
    }
}
