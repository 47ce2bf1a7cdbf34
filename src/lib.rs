//! MBR/EBR partition-table discovery
//!
//! A `no_std` engine that reads the Master Boot Record of every
//! physical disk, decodes the packed partition slots, locates an
//! optional boot manager partition, follows extended-partition chains
//! to enumerate logical drives, and assembles one ordered
//! [`PartitionList`] with inferred drive letters, catalog labels and
//! boot menu names.
//!
//! # Architecture
//!
//! - [`record`] - zero-copy views of raw MBR/EBR sectors and the boot
//!   manager name table
//! - [`chs`] - packed cylinder/sector field codec
//! - [`fstype`] - partition type code to display label catalog
//! - [`bootmgr`] - boot manager partition location and menu loading
//! - [`walker`] - the two-phase discovery walk
//! - [`io`] - the [`SectorRead`] trait plus a [`DiskSet`] adapter
//!   over LBA block devices
//!
//! # Usage
//!
//! ```ignore
//! use mbrscan::{discover, DiskGeometry, DiskSet};
//!
//! let mut disks = DiskSet::new();
//! disks.push(device, DiskGeometry::UNKNOWN);
//! let partitions = discover(&mut disks)?;
//! for partition in partitions.iter() {
//!     // drive letters, type labels, sizes, boot menu names
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod bootmgr;
pub mod chs;
pub mod error;
pub mod fstype;
pub mod io;
pub mod list;
pub mod record;
pub mod types;
pub mod walker;

pub use bootmgr::{locate, BootManager};
pub use error::{DiscoveryError, Result};
pub use io::{DiskGeometry, DiskSet, DiskSetError, SectorRead};
pub use list::PartitionList;
pub use types::{PartitionRecord, SectorAddress};
pub use walker::discover;
