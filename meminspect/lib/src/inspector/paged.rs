use super::{MemoryInspector, paged_bytes, traced};
use crate::Result;
use crate::os::{ConfigName, SystemConfig};

/// Inspector for systems whose page accounting table reports both physical
/// and free page counts (Linux, Android).
///
/// Total memory is `PhysicalPages * PageSize`, free memory is
/// `AvailablePages * PageSize`.
#[derive(Debug, Clone, Default)]
pub struct PagedInspector<C> {
    config: C,
}

impl<C: SystemConfig> PagedInspector<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: SystemConfig> MemoryInspector for PagedInspector<C> {
    fn total_memory(&self) -> Result<u64> {
        traced(
            "total memory",
            paged_bytes(&self.config, ConfigName::PhysicalPages),
        )
    }

    fn free_memory(&self) -> Result<u64> {
        traced(
            "free memory",
            paged_bytes(&self.config, ConfigName::AvailablePages),
        )
    }
}
