//! Partition tree walk
//!
//! Runs a full discovery pass: primary partitions from every disk's
//! MBR first, then logical drives from each disk's extended chain,
//! the latter only when a boot manager is present. Drive letters are
//! handed out along the way from one shared counter, so the walk
//! order is also the letter order.

use crate::bootmgr::{self, BootManager};
use crate::error::{DiscoveryError, Result};
use crate::fstype;
use crate::io::SectorRead;
use crate::list::PartitionList;
use crate::record::{BootRecord, NameTable};
use crate::types::{
    PartitionRecord, SectorAddress, FIRST_DRIVE_LETTER, MAX_CHAIN, MAX_DISKS, SECTOR_SIZE,
    SLOTS_PER_RECORD,
};
use alloc::vec::Vec;

#[cfg(feature = "trace")]
fn trace_read(addr: &SectorAddress) {
    log::trace!(
        "read disk {} chs {}/{}/{}",
        addr.disk,
        addr.cylinder,
        addr.head,
        addr.sector
    );
}

#[cfg(not(feature = "trace"))]
fn trace_read(_addr: &SectorAddress) {}

/// Run a full discovery pass over every physical disk.
///
/// # Arguments
///
/// * `io` - Sector-level access to the disks
///
/// # Returns
///
/// The ordered [`PartitionList`], or the error that aborted the
/// pass. An aborted pass yields no partial results.
pub fn discover<S: SectorRead>(io: &mut S) -> Result<PartitionList> {
    let disks = io.disk_count().min(MAX_DISKS);
    let boot_manager = bootmgr::locate(io);
    let mut walker = Walker {
        next_letter: FIRST_DRIVE_LETTER as u8,
        boot_manager,
        name_table: None,
        list: PartitionList::new(),
    };

    walker.scan_primaries(io, disks)?;
    if walker.boot_manager.is_some() {
        walker.scan_logicals(io, disks)?;
    }

    log::debug!(
        "discovered {} partitions across {} disks",
        walker.list.len(),
        disks
    );
    Ok(walker.list)
}

/// Walk state threaded through both phases
struct Walker {
    /// Next letter the shared counter will hand out
    next_letter: u8,
    boot_manager: Option<BootManager>,
    name_table: Option<NameTable>,
    list: PartitionList,
}

impl Walker {
    /// Collect primary partitions from every disk's MBR.
    ///
    /// The boot menu name table is loaded on the first iteration when
    /// a boot manager exists, so records of any disk can carry menu
    /// names. Primaries all receive the current letter without
    /// advancing the counter.
    fn scan_primaries<S: SectorRead>(&mut self, io: &mut S, disks: u8) -> Result<()> {
        let mut sector = [0u8; SECTOR_SIZE];
        for disk in 1..=disks {
            let addr = SectorAddress::mbr(disk);
            trace_read(&addr);
            io.read_sector(addr, &mut sector)
                .map_err(|_| DiscoveryError::PrimaryReadFailed)?;

            if let Some(bm) = self.boot_manager {
                if self.name_table.is_none() {
                    self.name_table = Some(bm.read_name_table(io)?);
                }
            }

            let record = BootRecord::parse(&sector);
            for (slot, entry) in record.entries.iter().enumerate() {
                if entry.is_unused() || entry.is_boot_manager() || entry.is_extended() {
                    continue;
                }
                let (bootable, boot_name) = self.menu_lookup(name_index(disk, slot));
                self.list.append(PartitionRecord {
                    disk,
                    boot_name,
                    drive_letter: Some(self.next_letter as char),
                    type_code: entry.fs_type,
                    type_label: fstype::label_for(entry.fs_type),
                    primary: true,
                    bootable,
                    size_mb: entry.size_mb(),
                });
            }
        }
        Ok(())
    }

    /// Collect logical drives from each disk's extended chain.
    fn scan_logicals<S: SectorRead>(&mut self, io: &mut S, disks: u8) -> Result<()> {
        let mut sector = [0u8; SECTOR_SIZE];
        for disk in 1..=disks {
            let addr = SectorAddress::mbr(disk);
            trace_read(&addr);
            io.read_sector(addr, &mut sector)
                .map_err(|_| DiscoveryError::LogicalReadFailed)?;

            let record = BootRecord::parse(&sector);
            let start = match record.entries.iter().find(|e| e.is_extended()) {
                Some(entry) => entry.start_address(disk),
                None => continue,
            };
            self.walk_chain(io, disk, start)?;
        }
        Ok(())
    }

    /// Follow one disk's chain of extended boot records.
    ///
    /// Pending records are kept on an explicit stack, pushed in
    /// reverse slot order so they pop in table order. Logical drives
    /// of the record at hand are appended before any linked record is
    /// read, so a record that lists its link ahead of a drive yields
    /// that drive before the linked record's drives. On the usual
    /// layout (drive first, link second) this is plain chain order.
    /// The chain is capped at [`MAX_CHAIN`] records to defuse link
    /// cycles on corrupt disks.
    fn walk_chain<S: SectorRead>(
        &mut self,
        io: &mut S,
        disk: u8,
        start: SectorAddress,
    ) -> Result<()> {
        let mut pending: Vec<SectorAddress> = Vec::new();
        pending.push(start);
        let mut sector = [0u8; SECTOR_SIZE];
        let mut visited = 0usize;

        while let Some(addr) = pending.pop() {
            visited += 1;
            if visited > MAX_CHAIN {
                log::warn!(
                    "disk {}: extended chain exceeded {} records, giving up",
                    disk,
                    MAX_CHAIN
                );
                return Err(DiscoveryError::ChainTooLong);
            }
            trace_read(&addr);
            io.read_sector(addr, &mut sector)
                .map_err(|_| DiscoveryError::LogicalReadFailed)?;

            let record = BootRecord::parse(&sector);
            let mut links: Vec<SectorAddress> = Vec::new();
            for (slot, entry) in record.entries.iter().enumerate() {
                if entry.is_unused() || entry.is_boot_manager() {
                    continue;
                }
                if entry.is_extended() {
                    links.push(entry.start_address(disk));
                    continue;
                }

                let drive_letter = if fstype::is_mountable(entry.fs_type) {
                    self.next_letter = self.next_letter.wrapping_add(1);
                    Some(self.next_letter as char)
                } else {
                    None
                };
                let (bootable, boot_name) = self.menu_lookup(name_index(disk, slot));
                self.list.append(PartitionRecord {
                    disk,
                    boot_name,
                    drive_letter,
                    type_code: entry.fs_type,
                    type_label: fstype::label_for(entry.fs_type),
                    primary: false,
                    bootable,
                    size_mb: entry.size_mb(),
                });
            }
            for link in links.into_iter().rev() {
                pending.push(link);
            }
        }
        Ok(())
    }

    /// Bootable flag and menu name for a global name-table index.
    fn menu_lookup(&self, index: usize) -> (bool, Option<[u8; 8]>) {
        let table = match &self.name_table {
            Some(table) => table,
            None => return (false, None),
        };
        if table.is_bootable(index) {
            (true, Some(table.name(index)))
        } else {
            (false, None)
        }
    }
}

/// Global name-table index of an MBR slot.
fn name_index(disk: u8, slot: usize) -> usize {
    (disk as usize - 1) * SLOTS_PER_RECORD + slot
}
