use serde::{Deserialize, Serialize};

/// Total and free physical memory, in bytes, read at one point in time.
///
/// Snapshots are computed fresh on every query and never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Total installed physical memory visible to the OS
    pub total_bytes: u64,
    /// Memory not allocated to any process
    pub free_bytes: u64,
}

impl MemorySnapshot {
    pub fn new(total_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            free_bytes,
        }
    }

    /// Bytes in use, saturating at zero if the OS reported more free
    /// memory than total memory.
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Whether `free_bytes <= total_bytes`, which holds under correct OS
    /// reporting but is not enforced.
    pub fn is_consistent(&self) -> bool {
        self.free_bytes <= self.total_bytes
    }
}
