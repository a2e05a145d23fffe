use std::ffi::CString;
use std::io;

use tracing::debug;

use super::{ControlTable, control_query};
use crate::{MemoryError, Result};

/// Largest control point value read, in bytes. Memory counters are at most
/// 64-bit; a larger value makes the kernel report `ENOMEM`.
const MAX_VALUE_LEN: usize = 8;

/// The host kernel's control table, read through `sysctlbyname(3)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sysctl;

impl Sysctl {
    pub fn new() -> Self {
        Self
    }
}

impl ControlTable for Sysctl {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let query = control_query(name);
        let c_name = CString::new(name)
            .map_err(|e| MemoryError::failed(&query, io::Error::new(io::ErrorKind::InvalidInput, e)))?;

        let mut buf = [0u8; MAX_VALUE_LEN];
        let mut len: libc::size_t = buf.len();
        // SAFETY: `c_name` is NUL-terminated, `buf` is writable for `len`
        // bytes, and no new value is written (null `newp`, zero `newlen`).
        let rc = unsafe {
            libc::sysctlbyname(
                c_name.as_ptr(),
                buf.as_mut_ptr().cast(),
                &mut len,
                std::ptr::null_mut(),
                0,
            )
        };
        if rc < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::ENOENT) {
                return Err(MemoryError::unavailable(
                    query,
                    "kernel does not expose this control point",
                ));
            }
            return Err(MemoryError::failed(query, err));
        }

        let value = buf[..len.min(MAX_VALUE_LEN)].to_vec();
        debug!(name, len = value.len(), "sysctl");
        Ok(value)
    }
}
