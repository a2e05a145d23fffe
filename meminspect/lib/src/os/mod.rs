//! Seams over the OS memory query interfaces.
//!
//! Two interface families exist: the POSIX `sysconf` page accounting table
//! ([`SystemConfig`]) and the BSD-family `sysctl` kernel control table
//! ([`ControlTable`]). Inspectors are written against these traits so the OS
//! can be swapped for stubs in tests.

use std::io;

use crate::{MemoryError, Result};

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
mod sysconf;
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
mod sysctl;

#[cfg(test)]
pub(crate) mod stub;

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
pub use sysconf::Sysconf;
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
pub use sysctl::Sysctl;

// ============================================================================
// Page accounting (sysconf)
// ============================================================================

/// Scalar names readable from the page accounting table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigName {
    /// Number of physical memory pages installed
    PhysicalPages,
    /// Bytes per page
    PageSize,
    /// Number of physical pages currently free
    AvailablePages,
}

impl ConfigName {
    /// The POSIX symbol for this name.
    pub fn symbol(self) -> &'static str {
        match self {
            ConfigName::PhysicalPages => "_SC_PHYS_PAGES",
            ConfigName::PageSize => "_SC_PAGESIZE",
            ConfigName::AvailablePages => "_SC_AVPHYS_PAGES",
        }
    }

    /// Label used in errors and logs, e.g. `sysconf(_SC_PHYS_PAGES)`.
    pub fn query(self) -> String {
        format!("sysconf({})", self.symbol())
    }
}

/// A source of page accounting scalars.
pub trait SystemConfig {
    /// Reads one scalar as an unsigned integer.
    fn value(&self, name: ConfigName) -> Result<u64>;
}

impl<T: SystemConfig + ?Sized> SystemConfig for &T {
    fn value(&self, name: ConfigName) -> Result<u64> {
        (**self).value(name)
    }
}

// ============================================================================
// Kernel control table (sysctl)
// ============================================================================

/// A kernel control table addressed by dotted names such as
/// `vm.page_free_count`.
pub trait ControlTable {
    /// Reads the raw bytes stored at `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

impl<T: ControlTable + ?Sized> ControlTable for &T {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read(name)
    }
}

/// Label used in errors and logs, e.g. `sysctl(hw.pagesize)`.
pub fn control_query(name: &str) -> String {
    format!("sysctl({name})")
}

/// Decodes a control point buffer as a native-endian unsigned integer.
///
/// Accepts 8-byte (`u64`) and 4-byte (`u32`) buffers. Anything else is a
/// [`MemoryError::QueryFailed`].
pub fn decode_native(name: &str, buf: &[u8]) -> Result<u64> {
    if let Ok(bytes) = <[u8; 8]>::try_from(buf) {
        return Ok(u64::from_ne_bytes(bytes));
    }
    if let Ok(bytes) = <[u8; 4]>::try_from(buf) {
        return Ok(u64::from(u32::from_ne_bytes(bytes)));
    }
    Err(MemoryError::failed(
        control_query(name),
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected a 4 or 8 byte integer, got {} bytes", buf.len()),
        ),
    ))
}
