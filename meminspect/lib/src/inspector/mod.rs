//! Memory inspectors, one per platform family.
//!
//! [`host_inspector`] picks the right one for the build target. The other
//! inspectors stay public so they can be driven with custom OS tables.

use std::io;

use tracing::{debug, warn};

use crate::os::{ConfigName, SystemConfig};
use crate::{MemoryError, MemorySnapshot, Result};

mod control_table;
mod host;
mod paged;
mod portable;

pub use control_table::{ControlTableInspector, FreeMemoryPoint, FreeMemoryUnit};
pub use host::{HostInspector, host_inspector};
pub use paged::PagedInspector;
pub use portable::SysinfoInspector;

/// Queries the host OS for total and free physical memory.
///
/// Both queries are stateless: every call goes to the OS, and a failed call
/// is reported as an error instead of a number.
pub trait MemoryInspector {
    /// Total installed physical memory in bytes.
    fn total_memory(&self) -> Result<u64>;

    /// Memory currently not allocated to any process, in bytes.
    fn free_memory(&self) -> Result<u64>;

    /// Reads both values. Fails with the first error encountered.
    fn snapshot(&self) -> Result<MemorySnapshot> {
        let total_bytes = self.total_memory()?;
        let free_bytes = self.free_memory()?;
        Ok(MemorySnapshot::new(total_bytes, free_bytes))
    }
}

impl<T: MemoryInspector + ?Sized> MemoryInspector for &T {
    fn total_memory(&self) -> Result<u64> {
        (**self).total_memory()
    }

    fn free_memory(&self) -> Result<u64> {
        (**self).free_memory()
    }
}

impl<T: MemoryInspector + ?Sized> MemoryInspector for Box<T> {
    fn total_memory(&self) -> Result<u64> {
        (**self).total_memory()
    }

    fn free_memory(&self) -> Result<u64> {
        (**self).free_memory()
    }
}

/// Multiplies a page count by the page size, failing on a zero page size
/// or on overflow.
pub(crate) fn pages_to_bytes(query: &str, pages: u64, page_size: u64) -> Result<u64> {
    if page_size == 0 {
        return Err(MemoryError::failed(
            query,
            io::Error::new(io::ErrorKind::InvalidData, "page size reported as zero"),
        ));
    }
    pages.checked_mul(page_size).ok_or_else(|| {
        MemoryError::failed(
            query,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{pages} pages of {page_size} bytes overflows u64"),
            ),
        )
    })
}

/// Reads a page count of kind `count` and converts it to bytes.
pub(crate) fn paged_bytes(config: &impl SystemConfig, count: ConfigName) -> Result<u64> {
    let pages = config.value(count)?;
    let page_size = config.value(ConfigName::PageSize)?;
    pages_to_bytes(&count.query(), pages, page_size)
}

/// Logs the outcome of one inspector operation and passes it through.
pub(crate) fn traced(what: &'static str, outcome: Result<u64>) -> Result<u64> {
    match &outcome {
        Ok(bytes) => debug!(what, bytes, "memory query succeeded"),
        Err(e) => warn!(what, error = %e, "memory query failed"),
    }
    outcome
}
