//! Discovery result container

use crate::types::PartitionRecord;
use alloc::vec::Vec;

/// Ordered list of discovered partitions
///
/// Records appear in walk order: every primary partition (disks
/// ascending, slots ascending) before every logical drive (disks
/// ascending, chain order). Dropping the list releases all records
/// at once.
#[derive(Debug, PartialEq, Eq)]
pub struct PartitionList {
    records: Vec<PartitionRecord>,
}

impl PartitionList {
    /// Empty list.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, preserving insertion order.
    pub fn append(&mut self, record: PartitionRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index` in walk order.
    pub fn get(&self, index: usize) -> Option<&PartitionRecord> {
        self.records.get(index)
    }

    /// Iterate over records in walk order.
    pub fn iter(&self) -> impl Iterator<Item = &PartitionRecord> {
        self.records.iter()
    }
}

impl Default for PartitionList {
    fn default() -> Self {
        Self::new()
    }
}
