//! Error types for partition discovery

use core::fmt;

/// Result type for discovery operations
pub type Result<T> = core::result::Result<T, DiscoveryError>;

/// Errors that abort a discovery pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The boot manager's menu sector could not be read
    BootManagerNotFound,
    /// A disk's MBR could not be read while collecting primary
    /// partitions
    PrimaryReadFailed,
    /// An extended boot record could not be read while collecting
    /// logical drives
    LogicalReadFailed,
    /// An extended-partition chain failed to terminate within the
    /// per-disk cap
    ChainTooLong,
}

impl DiscoveryError {
    /// Numeric code identifying the phase that failed.
    ///
    /// 1 = boot manager menu, 2 = primary scan, 3 = logical scan.
    pub fn code(&self) -> u8 {
        match self {
            Self::BootManagerNotFound => 1,
            Self::PrimaryReadFailed => 2,
            Self::LogicalReadFailed | Self::ChainTooLong => 3,
        }
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BootManagerNotFound => write!(f, "Boot manager menu sector unreadable"),
            Self::PrimaryReadFailed => write!(f, "MBR unreadable during primary scan"),
            Self::LogicalReadFailed => write!(f, "EBR unreadable during logical scan"),
            Self::ChainTooLong => write!(f, "Extended partition chain too long"),
        }
    }
}
