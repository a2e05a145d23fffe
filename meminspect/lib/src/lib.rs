//! Cross-platform system memory introspection.
//!
//! Reports total installed and currently free physical memory using the
//! host OS's own accounting interfaces. Every query goes to the OS; nothing
//! is cached, and a failed query is an error rather than a number.

pub mod error;
pub mod inspector;
pub mod os;
pub mod snapshot;

pub use error::{MemoryError, Result};
pub use inspector::{
    ControlTableInspector, FreeMemoryPoint, FreeMemoryUnit, HostInspector, MemoryInspector,
    PagedInspector, SysinfoInspector, host_inspector,
};
pub use snapshot::MemorySnapshot;

/// Total installed physical memory of the host, in bytes.
///
/// ## Examples
///
/// ```no_run
/// let total = meminspect_lib::total_memory().unwrap();
/// println!("Memory: {} GB total", total / (1024 * 1024 * 1024));
/// ```
///
/// ## Errors
///
/// [`MemoryError::QueryUnavailable`] if the platform has no way to answer,
/// [`MemoryError::QueryFailed`] if the OS reported a failure.
pub fn total_memory() -> Result<u64> {
    host_inspector().total_memory()
}

/// Free physical memory of the host, in bytes.
///
/// ## Errors
///
/// Same as [`total_memory`]. A failed query never yields a stale or
/// uninitialized value.
pub fn free_memory() -> Result<u64> {
    host_inspector().free_memory()
}

/// Reads total and free memory of the host.
///
/// ## Examples
///
/// ```no_run
/// use meminspect_lib::snapshot;
///
/// let mem = snapshot().unwrap();
/// println!("{} of {} bytes free", mem.free_bytes, mem.total_bytes);
/// ```
pub fn snapshot() -> Result<MemorySnapshot> {
    host_inspector().snapshot()
}
