use std::io::{self, Write};

use meminspect_lib::{MemoryInspector, MemorySnapshot, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::banner;

/// The two memory readings, kept apart so one failed query does not hide
/// the other.
#[derive(Debug)]
pub struct MemoryReadings {
    pub total: Result<u64>,
    pub free: Result<u64>,
}

impl MemoryReadings {
    /// Queries `inspector` once for each value. Failures are logged and kept.
    pub fn read(inspector: &impl MemoryInspector) -> Self {
        let readings = Self {
            total: inspector.total_memory(),
            free: inspector.free_memory(),
        };

        for (what, reading) in [("total", &readings.total), ("free", &readings.free)] {
            if let Err(e) = reading {
                warn!(what, query = e.query(), "showing memory as unavailable: {e}");
            }
        }
        if let Some(snapshot) = readings.snapshot() {
            info!(
                total = snapshot.total_bytes,
                free = snapshot.free_bytes,
                used = snapshot.used_bytes(),
                "memory read"
            );
        }

        readings
    }

    /// Both readings, when both queries succeeded.
    pub fn snapshot(&self) -> Option<MemorySnapshot> {
        match (&self.total, &self.free) {
            (Ok(total), Ok(free)) => Some(MemorySnapshot::new(*total, *free)),
            _ => None,
        }
    }
}

/// JSON form of the readings. A failed query is `null`.
#[derive(Debug, Serialize)]
pub struct JsonReadings {
    pub total_bytes: Option<u64>,
    pub free_bytes: Option<u64>,
}

impl From<&MemoryReadings> for JsonReadings {
    fn from(readings: &MemoryReadings) -> Self {
        Self {
            total_bytes: readings.total.as_ref().ok().copied(),
            free_bytes: readings.free.as_ref().ok().copied(),
        }
    }
}

/// Print the startup banner to stdout.
pub fn print_banner(readings: &MemoryReadings) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", banner::render(readings))
}

/// Print the readings as pretty JSON to stdout.
pub fn print_json(readings: &MemoryReadings) -> serde_json::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonReadings::from(readings))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use meminspect_lib::MemoryError;

    struct Stub {
        free_fails: bool,
    }

    impl MemoryInspector for Stub {
        fn total_memory(&self) -> Result<u64> {
            Ok(4_096_000_000)
        }

        fn free_memory(&self) -> Result<u64> {
            if self.free_fails {
                Err(MemoryError::failed(
                    "sysctl(vm.page_free_count)",
                    io::Error::from(io::ErrorKind::PermissionDenied),
                ))
            } else {
                Ok(2_048_000_000)
            }
        }
    }

    #[test]
    fn test_read_keeps_both_values() {
        let readings = MemoryReadings::read(&Stub { free_fails: false });
        assert_eq!(
            readings.snapshot(),
            Some(MemorySnapshot::new(4_096_000_000, 2_048_000_000))
        );
    }

    #[test]
    fn test_read_keeps_total_when_free_fails() {
        let readings = MemoryReadings::read(&Stub { free_fails: true });
        assert_eq!(*readings.total.as_ref().unwrap(), 4_096_000_000);
        assert!(readings.free.is_err());
        assert_eq!(readings.snapshot(), None);
    }

    #[test]
    fn test_json_uses_null_for_failed_query() {
        let readings = MemoryReadings::read(&Stub { free_fails: true });
        let json = serde_json::to_value(JsonReadings::from(&readings)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "total_bytes": 4_096_000_000u64, "free_bytes": null })
        );
    }
}
