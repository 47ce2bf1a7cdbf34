//! Common test utilities and mock disks

// Not every test binary uses every helper here.
#![allow(dead_code)]

pub mod builder;
pub use builder::DiskBuilder;

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use mbrscan::types::SECTOR_SIZE;
use mbrscan::{DiskGeometry, SectorAddress, SectorRead};
use std::io;

/// Geometry every test image is laid out for: 2 heads, 16 sectors
/// per track, so one cylinder covers 32 sectors
pub const TEST_GEOMETRY: DiskGeometry = DiskGeometry {
    heads_per_cylinder: 2,
    sectors_per_track: 16,
};

/// In-memory block device for testing
#[derive(Debug, Clone)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
}

impl MemoryBlockDevice {
    /// Create a new memory block device from raw data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            block_size: SECTOR_SIZE,
        }
    }
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write beyond end of device",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Error type of the mock backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockIoError;

/// Mock multi-disk backend with failure injection and a read log
pub struct MockDisks {
    /// One raw image per disk, in disk-number order
    pub images: Vec<Vec<u8>>,
    pub geometry: DiskGeometry,
    /// Override for the disk count reported to the engine
    pub reported_disks: Option<u8>,
    /// Addresses that refuse to read
    pub failing: Vec<SectorAddress>,
    /// Every address the engine attempted, in order
    pub reads: Vec<SectorAddress>,
}

impl MockDisks {
    pub fn new(images: Vec<Vec<u8>>) -> Self {
        Self {
            images,
            geometry: TEST_GEOMETRY,
            reported_disks: None,
            failing: Vec::new(),
            reads: Vec::new(),
        }
    }

    /// Make the sector at `addr` unreadable.
    pub fn fail_at(&mut self, addr: SectorAddress) {
        self.failing.push(addr);
    }
}

impl SectorRead for MockDisks {
    type Error = MockIoError;

    fn disk_count(&mut self) -> u8 {
        self.reported_disks.unwrap_or(self.images.len() as u8)
    }

    fn read_sector(
        &mut self,
        addr: SectorAddress,
        dst: &mut [u8; SECTOR_SIZE],
    ) -> Result<(), Self::Error> {
        self.reads.push(addr);
        if addr.disk == 0 || self.failing.contains(&addr) {
            return Err(MockIoError);
        }
        let image = self.images.get(addr.disk as usize - 1).ok_or(MockIoError)?;
        let offset = addr.lba(&self.geometry) as usize * SECTOR_SIZE;
        if offset + SECTOR_SIZE > image.len() {
            return Err(MockIoError);
        }
        dst.copy_from_slice(&image[offset..offset + SECTOR_SIZE]);
        Ok(())
    }
}
