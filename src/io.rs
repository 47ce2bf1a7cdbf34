//! Sector-level disk access
//!
//! Discovery reads whole 512-byte sectors addressed by CHS. The
//! [`SectorRead`] trait is the only surface the walk needs; firmware
//! or OS backends implement it directly, while [`DiskSet`] adapts any
//! collection of LBA block devices by translating addresses through a
//! per-disk [`DiskGeometry`].

use crate::types::{SectorAddress, SECTOR_SIZE};
use alloc::vec::Vec;
use core::fmt;
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

pub use gpt_disk_types::DiskGeometry;

/// CHS-addressed access to a set of physical disks
pub trait SectorRead {
    /// Backend error type
    type Error;

    /// Number of physical disks present.
    fn disk_count(&mut self) -> u8;

    /// Read the sector at `addr` into `dst`.
    fn read_sector(
        &mut self,
        addr: SectorAddress,
        dst: &mut [u8; SECTOR_SIZE],
    ) -> Result<(), Self::Error>;
}

/// Errors from the [`DiskSet`] adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskSetError<E> {
    /// The address names a disk the set does not hold
    NoSuchDisk,
    /// The underlying block device failed
    Io(E),
}

impl<E: fmt::Display> fmt::Display for DiskSetError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchDisk => write!(f, "No such disk"),
            Self::Io(e) => write!(f, "Block device error: {}", e),
        }
    }
}

/// [`SectorRead`] over a collection of LBA block devices
///
/// Disk numbers are assigned in push order starting at 1. Every
/// device must expose 512-byte blocks.
pub struct DiskSet<B> {
    disks: Vec<(B, DiskGeometry)>,
}

impl<B: BlockIo> DiskSet<B> {
    /// Empty set.
    pub fn new() -> Self {
        Self { disks: Vec::new() }
    }

    /// Append a device; it becomes the highest-numbered disk.
    pub fn push(&mut self, device: B, geometry: DiskGeometry) {
        self.disks.push((device, geometry));
    }

    /// Number of devices in the set.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Whether the set holds no devices.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }
}

impl<B: BlockIo> Default for DiskSet<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlockIo> SectorRead for DiskSet<B> {
    type Error = DiskSetError<B::Error>;

    fn disk_count(&mut self) -> u8 {
        self.disks.len().min(u8::MAX as usize) as u8
    }

    fn read_sector(
        &mut self,
        addr: SectorAddress,
        dst: &mut [u8; SECTOR_SIZE],
    ) -> Result<(), Self::Error> {
        if addr.disk == 0 {
            return Err(DiskSetError::NoSuchDisk);
        }
        let (device, geometry) = self
            .disks
            .get_mut(addr.disk as usize - 1)
            .ok_or(DiskSetError::NoSuchDisk)?;
        let lba = addr.lba(geometry);
        device.read_blocks(Lba(lba), dst).map_err(DiskSetError::Io)
    }
}
