use super::{MemoryInspector, paged_bytes, pages_to_bytes, traced};
use crate::Result;
use crate::os::{ConfigName, ControlTable, SystemConfig, control_query, decode_native};

/// How the value at a [`FreeMemoryPoint`] is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeMemoryUnit {
    /// The value is already a byte count
    Bytes,
    /// The value is a page count, to be multiplied by the page size
    Pages,
}

/// The kernel control point that reports free memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeMemoryPoint {
    pub name: &'static str,
    pub unit: FreeMemoryUnit,
}

impl FreeMemoryPoint {
    /// Darwin's free page counter.
    pub const DARWIN: FreeMemoryPoint = FreeMemoryPoint::pages("vm.page_free_count");
    /// FreeBSD and DragonFly's free page counter.
    pub const FREEBSD: FreeMemoryPoint = FreeMemoryPoint::pages("vm.stats.vm.v_free_count");

    pub const fn bytes(name: &'static str) -> Self {
        Self {
            name,
            unit: FreeMemoryUnit::Bytes,
        }
    }

    pub const fn pages(name: &'static str) -> Self {
        Self {
            name,
            unit: FreeMemoryUnit::Pages,
        }
    }
}

/// Inspector for BSD-family kernels (macOS, iOS, FreeBSD, DragonFly).
///
/// Total memory comes from the page accounting table. Free memory is read
/// from a kernel control point and decoded from its raw buffer.
#[derive(Debug, Clone)]
pub struct ControlTableInspector<C, T> {
    config: C,
    table: T,
    free_point: FreeMemoryPoint,
}

impl<C: SystemConfig, T: ControlTable> ControlTableInspector<C, T> {
    pub fn new(config: C, table: T, free_point: FreeMemoryPoint) -> Self {
        Self {
            config,
            table,
            free_point,
        }
    }

    pub fn free_point(&self) -> FreeMemoryPoint {
        self.free_point
    }

    fn read_free(&self) -> Result<u64> {
        let name = self.free_point.name;
        let raw = self.table.read(name)?;
        let value = decode_native(name, &raw)?;
        match self.free_point.unit {
            FreeMemoryUnit::Bytes => Ok(value),
            FreeMemoryUnit::Pages => {
                let page_size = self.config.value(ConfigName::PageSize)?;
                pages_to_bytes(&control_query(name), value, page_size)
            }
        }
    }
}

impl<C: SystemConfig, T: ControlTable> MemoryInspector for ControlTableInspector<C, T> {
    fn total_memory(&self) -> Result<u64> {
        traced(
            "total memory",
            paged_bytes(&self.config, ConfigName::PhysicalPages),
        )
    }

    fn free_memory(&self) -> Result<u64> {
        traced("free memory", self.read_free())
    }
}
