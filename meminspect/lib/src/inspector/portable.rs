use std::io;

use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::{MemoryInspector, traced};
use crate::{MemoryError, Result};

const QUERY: &str = "sysinfo";

/// Inspector backed by the `sysinfo` crate, for targets without a native
/// backend here (Windows and anything else sysinfo supports).
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoInspector;

impl SysinfoInspector {
    pub fn new() -> Self {
        Self
    }

    /// A fresh RAM-only refresh. Nothing is kept between queries.
    fn refreshed() -> Result<System> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MemoryError::unavailable(
                QUERY,
                format!("no memory backend for {}", std::env::consts::OS),
            ));
        }
        Ok(System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        ))
    }

    fn read_total() -> Result<u64> {
        let total = Self::refreshed()?.total_memory();
        // sysinfo reports 0 when it could not read the value
        if total == 0 {
            return Err(MemoryError::failed(
                QUERY,
                io::Error::other("total memory reported as zero"),
            ));
        }
        Ok(total)
    }
}

impl MemoryInspector for SysinfoInspector {
    fn total_memory(&self) -> Result<u64> {
        traced("total memory", Self::read_total())
    }

    fn free_memory(&self) -> Result<u64> {
        traced(
            "free memory",
            Self::refreshed().map(|sys| sys.free_memory()),
        )
    }
}
