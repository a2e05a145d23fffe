use std::io;

use tracing::debug;

use super::{ConfigName, SystemConfig};
use crate::{MemoryError, Result};

/// The host's page accounting table, read through `sysconf(3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sysconf;

impl Sysconf {
    pub fn new() -> Self {
        Self
    }
}

fn raw_name(name: ConfigName) -> Option<libc::c_int> {
    match name {
        ConfigName::PhysicalPages => Some(libc::_SC_PHYS_PAGES),
        ConfigName::PageSize => Some(libc::_SC_PAGESIZE),
        #[cfg(any(target_os = "linux", target_os = "android"))]
        ConfigName::AvailablePages => Some(libc::_SC_AVPHYS_PAGES),
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        ConfigName::AvailablePages => None,
    }
}

impl SystemConfig for Sysconf {
    fn value(&self, name: ConfigName) -> Result<u64> {
        let Some(raw) = raw_name(name) else {
            return Err(MemoryError::unavailable(
                name.query(),
                format!("{} is not exposed on {}", name.symbol(), std::env::consts::OS),
            ));
        };

        // SAFETY: sysconf only reads a process-wide table and has no
        // memory-safety preconditions.
        let value = unsafe { libc::sysconf(raw) };
        if value < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::EINVAL) {
                return Err(MemoryError::unavailable(
                    name.query(),
                    "name not supported by this system",
                ));
            }
            return Err(MemoryError::failed(name.query(), err));
        }

        let value = u64::try_from(value).map_err(|e| {
            MemoryError::failed(name.query(), io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        debug!(name = name.symbol(), value, "sysconf");
        Ok(value)
    }
}
