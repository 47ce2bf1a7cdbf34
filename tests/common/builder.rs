//! Raw disk image construction for tests
//!
//! Images are laid out for [`TEST_GEOMETRY`](super::TEST_GEOMETRY):
//! sector (c, h, s) lives at LBA (c * 2 + h) * 16 + s - 1.

use mbrscan::types::{SECTOR_SIZE, SLOTS_PER_RECORD};

/// LBA of the sector at (cylinder, head, sector) under the test
/// geometry. Arithmetic kept independent of the crate's own
/// translation so the two check each other.
pub fn chs_lba(cylinder: u16, head: u8, sector: u8) -> usize {
    (cylinder as usize * 2 + head as usize) * 16 + sector as usize - 1
}

/// Byte-level builder for MBR/EBR disk images
pub struct DiskBuilder {
    data: Vec<u8>,
}

impl DiskBuilder {
    /// Zero-filled image of `sectors` 512-byte sectors.
    pub fn new(sectors: usize) -> Self {
        Self {
            data: vec![0u8; sectors * SECTOR_SIZE],
        }
    }

    /// Fill one partition slot of the record at `record_lba`.
    ///
    /// `start` is the partition's first sector as (cylinder, head,
    /// sector); the packed field is assembled by hand here rather
    /// than through the crate's codec.
    pub fn slot(
        &mut self,
        record_lba: usize,
        slot: usize,
        fs_type: u8,
        start: (u16, u8, u8),
        total_sectors: u32,
    ) -> &mut Self {
        assert!(slot < SLOTS_PER_RECORD);
        let (cylinder, head, sector) = start;
        let base = record_lba * SECTOR_SIZE + 446 + slot * 16;

        self.data[base] = 0x00; // boot flag
        self.data[base + 1] = head;
        // Packed CHS: sector in bits 0-5, cylinder top bits in 6-7
        // of the low byte, cylinder low bits in the high byte
        self.data[base + 2] = (sector & 0x3F) | (((cylinder >> 8) as u8) << 6);
        self.data[base + 3] = (cylinder & 0xFF) as u8;
        self.data[base + 4] = fs_type;
        // End CHS left zero; nothing reads it
        let lba = chs_lba(cylinder, head, sector) as u32;
        self.data[base + 8..base + 12].copy_from_slice(&lba.to_le_bytes());
        self.data[base + 12..base + 16].copy_from_slice(&total_sectors.to_le_bytes());
        self
    }

    /// Write the 0xAA55 signature into the record at `record_lba`.
    pub fn signature(&mut self, record_lba: usize) -> &mut Self {
        let base = record_lba * SECTOR_SIZE;
        self.data[base + 510] = 0x55;
        self.data[base + 511] = 0xAA;
        self
    }

    /// Fill one slot of the boot menu name sector at `table_lba`.
    ///
    /// `flags` is stored raw; bit 0 is the bootable bit.
    pub fn menu_slot(
        &mut self,
        table_lba: usize,
        index: usize,
        flags: u8,
        name: &[u8; 8],
    ) -> &mut Self {
        let base = table_lba * SECTOR_SIZE + index * 16;
        self.data[base] = flags;
        self.data[base + 1..base + 9].copy_from_slice(name);
        self
    }

    /// Finish the image.
    pub fn build(self) -> Vec<u8> {
        self.data
    }
}
