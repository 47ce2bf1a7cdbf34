//! Boot manager location
//!
//! A boot manager installs itself as a dedicated primary partition of
//! type 0x0A and keeps its menu in a name table near the partition's
//! start. Its presence decides whether discovery walks extended
//! chains at all and whether records carry menu names.

use crate::error::{DiscoveryError, Result};
use crate::io::SectorRead;
use crate::record::{BootRecord, NameTable, PartitionEntry};
use crate::types::{SectorAddress, MAX_DISKS, SECTOR_SIZE};

/// Offset of the name table from the boot manager partition's first
/// sector, in sectors
pub const NAME_TABLE_OFFSET: u8 = 3;

/// A located boot manager partition
#[derive(Debug, Clone, Copy)]
pub struct BootManager {
    /// Physical disk holding the partition (1-based)
    pub disk: u8,
    /// MBR slot the partition occupies
    pub slot: usize,
    /// The partition's own slot contents
    pub entry: PartitionEntry,
}

impl BootManager {
    /// Read the boot menu name table.
    ///
    /// The table lives [`NAME_TABLE_OFFSET`] sectors past the
    /// partition's first sector.
    pub fn read_name_table<S: SectorRead>(&self, io: &mut S) -> Result<NameTable> {
        let mut addr = self.entry.start_address(self.disk);
        addr.sector += NAME_TABLE_OFFSET;
        let mut sector = [0u8; SECTOR_SIZE];
        io.read_sector(addr, &mut sector)
            .map_err(|_| DiscoveryError::BootManagerNotFound)?;
        Ok(NameTable::parse(&sector))
    }
}

/// Scan every disk's MBR for a boot manager partition.
///
/// Disks are visited in ascending order, slots within each MBR in
/// table order, and the first match wins. A disk whose MBR cannot be
/// read contributes no match; `None` means no readable disk carries
/// a boot manager.
pub fn locate<S: SectorRead>(io: &mut S) -> Option<BootManager> {
    let disks = io.disk_count().min(MAX_DISKS);
    let mut sector = [0u8; SECTOR_SIZE];
    for disk in 1..=disks {
        if io.read_sector(SectorAddress::mbr(disk), &mut sector).is_err() {
            log::debug!("disk {}: MBR unreadable, skipped in boot manager scan", disk);
            continue;
        }
        let record = BootRecord::parse(&sector);
        for (slot, entry) in record.entries.iter().enumerate() {
            if entry.is_boot_manager() {
                log::debug!("boot manager found on disk {} slot {}", disk, slot);
                return Some(BootManager {
                    disk,
                    slot,
                    entry: *entry,
                });
            }
        }
    }
    None
}
